use barrel_temp_core::ThermalParameters;

/// C-compatible mirror of `ThermalParameters`.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrelThermalParameters {
    /// Ambient temperature (°C).
    pub ambient_c: f64,

    /// Barrel wall thickness (m). Must be > 0.
    pub thickness_m: f64,

    /// Elapsed time since firing (s). Must be > 0 for a result; 0 is singular.
    pub elapsed_s: f64,

    /// Thermal conductivity (W/(m·K)). Must be > 0.
    pub conductivity: f64,

    /// Density (kg/m³). Must be > 0.
    pub density: f64,

    /// Specific heat (J/(kg·K)). Must be > 0.
    pub specific_heat: f64,
}

impl From<ThermalParameters> for BarrelThermalParameters {
    fn from(params: ThermalParameters) -> Self {
        Self {
            ambient_c: *params.ambient,
            thickness_m: *params.thickness,
            elapsed_s: *params.elapsed,
            conductivity: *params.conductivity,
            density: *params.density,
            specific_heat: *params.specific_heat,
        }
    }
}

impl From<BarrelThermalParameters> for ThermalParameters {
    fn from(p: BarrelThermalParameters) -> Self {
        ThermalParameters::new(
            p.ambient_c,
            p.thickness_m,
            p.elapsed_s,
            p.conductivity,
            p.density,
            p.specific_heat,
        )
    }
}

/// Reference parameter set: carbon steel, 15.2 mm wall, 30 s after firing at 25°C.
#[no_mangle]
pub extern "C" fn barrel_temp_default_parameters() -> BarrelThermalParameters {
    ThermalParameters::default().into()
}
