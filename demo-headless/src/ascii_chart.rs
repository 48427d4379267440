//! Terminal rendering of a chart series

use barrel_temp_core::ChartSeries;

/// Plot `series` on a `width` x `height` character grid with a labelled y axis.
///
/// Returns an empty string for an empty series.
pub fn render(series: &ChartSeries, width: usize, height: usize) -> String {
    let (Some((x_min, x_max)), Some((y_min, y_max))) = (series.x_range(), series.y_range()) else {
        return String::new();
    };
    let width = width.max(2);
    let height = height.max(2);

    let mut grid = vec![vec![' '; width]; height];
    for &(x, y) in &series.points {
        let col = scale(x, x_min, x_max, width);
        let row = height - 1 - scale(y, y_min, y_max, height);
        grid[row][col] = '*';
    }

    let mut lines = Vec::with_capacity(height + 4);
    lines.push(series.y_label.clone());
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{y_max:>8.1}")
        } else if i == height - 1 {
            format!("{y_min:>8.1}")
        } else {
            " ".repeat(8)
        };
        lines.push(format!("{label} |{}", row.iter().collect::<String>()));
    }
    lines.push(format!("{} +{}", " ".repeat(8), "-".repeat(width)));
    lines.push(format!(
        "{} {x_min:<w$.1}{x_max:>.1}",
        " ".repeat(9),
        w = width.saturating_sub(6)
    ));
    lines.push(format!("{}{}", " ".repeat(10), series.x_label));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Map `v` in `[lo, hi]` onto `0..cells`.
fn scale(v: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (t * (cells - 1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<(f64, f64)>) -> ChartSeries {
        ChartSeries {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            points,
        }
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert!(render(&series(vec![]), 40, 10).is_empty());
    }

    #[test]
    fn test_corners_plotted() {
        let text = render(&series(vec![(0.0, 0.0), (10.0, 100.0)]), 20, 5);
        let lines: Vec<&str> = text.lines().collect();
        // y label, 5 grid rows, axis, x labels, x title
        assert_eq!(lines.len(), 9);
        assert!(lines[1].ends_with('*'));
        assert!(lines[5].contains("|*"));
        assert!(lines[1].contains("100.0"));
    }

    #[test]
    fn test_every_section_is_emitted() {
        let text = render(&series(vec![(25.0, 25.0), (300.0, 365.04)]), 30, 6);
        assert!(text.ends_with("x\n"));
        assert!(text.starts_with("y\n"));
        assert!(text.contains(&format!("{} +{}", " ".repeat(8), "-".repeat(30))));
        assert!(text.contains("25.0") && text.contains("300.0") && text.contains("365.0"));
        assert_eq!(text.lines().count(), 6 + 4);
    }

    #[test]
    fn test_single_point_does_not_panic() {
        let text = render(&series(vec![(25.0, 25.0)]), 10, 4);
        assert_eq!(text.matches('*').count(), 1);
    }
}
