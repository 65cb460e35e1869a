#[derive(Debug, Clone, Copy)]
pub struct GlimpseConfig {
    pub max_items: usize,
    pub edge_items: usize,
    pub precision: usize,
}

impl Default for GlimpseConfig {
    fn default() -> Self {
        GlimpseConfig {
            max_items: 10,
            edge_items: 3,
            precision: 2,
        }
    }
}

/// Short, single line rendering of a long numeric vector.
///
/// Long vectors show only the first and last `edge_items` values
/// and the total length.
pub fn glimpse_values(v: &[f64], config: Option<GlimpseConfig>) -> String {
    let config = config.unwrap_or_default();
    let fmt_one = |x: &f64| format!("{:.*}", config.precision, x);

    if v.len() <= config.max_items {
        let inner: Vec<String> = v.iter().map(fmt_one).collect();
        return format!("[{}]", inner.join(", "));
    }

    let edge = config.edge_items.min(v.len() / 2);
    let head: Vec<String> = v[..edge].iter().map(fmt_one).collect();
    let tail: Vec<String> = v[v.len() - edge..].iter().map(fmt_one).collect();
    format!(
        "[{}, ..., {}] len = {}",
        head.join(", "),
        tail.join(", "),
        v.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glimpse_short() {
        assert_eq!(glimpse_values(&[1.0, 2.5], None), "[1.00, 2.50]");
        assert_eq!(glimpse_values(&[], None), "[]");
    }

    #[test]
    fn test_glimpse_long() {
        let v: Vec<f64> = (0..20).map(|x| x as f64).collect();
        assert_eq!(
            glimpse_values(&v, None),
            "[0.00, 1.00, 2.00, ..., 17.00, 18.00, 19.00] len = 20"
        );
    }
}
