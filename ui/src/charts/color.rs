/// `#RRGGBB` (or `RRGGBB`) to `rgba(r,g,b,alpha)`. Unparseable input maps to black.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let digits = hex.trim().trim_start_matches('#');
    let packed = u32::from_str_radix(digits, 16).unwrap_or(0);
    let r = (packed >> 16) & 255;
    let g = (packed >> 8) & 255;
    let b = packed & 255;
    format!("rgba({r},{g},{b},{alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#7C5DFA", 0.12), "rgba(124,93,250,0.12)");
        assert_eq!(hex_to_rgba("43A9D4", 1.0), "rgba(67,169,212,1)");
        assert_eq!(hex_to_rgba("nope", 0.5), "rgba(0,0,0,0.5)");
    }
}
