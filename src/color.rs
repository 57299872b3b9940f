use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Chart palettes
// ---------------------------------------------------------------------------

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// `n` soft, evenly spaced hues for the review pie.
pub fn pastel(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 200.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.78);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

/// `n` colours interpolated through the given stops in linear RGB.
pub fn gradient(n: usize, stops: &[(u8, u8, u8)]) -> Vec<Color32> {
    match (n, stops.len()) {
        (0, _) | (_, 0) => return Vec::new(),
        (_, 1) => {
            let (r, g, b) = stops[0];
            return vec![Color32::from_rgb(r, g, b); n];
        }
        _ => {}
    }
    let linear: Vec<LinSrgb> = stops
        .iter()
        .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
        .collect();
    let segments = (linear.len() - 1) as f32;

    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let pos = t * segments;
            let seg = (pos.floor() as usize).min(linear.len() - 2);
            let local = pos - seg as f32;
            let mixed = linear[seg].mix(linear[seg + 1], local);
            to_color32(Srgb::from_linear(mixed))
        })
        .collect()
}

/// Dark purple → teal → yellow, for manufacturer counts.
pub fn viridis(n: usize) -> Vec<Color32> {
    gradient(n, &[(68, 1, 84), (33, 145, 140), (253, 231, 37)])
}

/// Black-violet → red → cream, for top rated medicines.
pub fn magma(n: usize) -> Vec<Color32> {
    gradient(n, &[(0, 0, 4), (183, 55, 121), (252, 253, 191)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_requested_length() {
        assert_eq!(pastel(3).len(), 3);
        assert_eq!(viridis(10).len(), 10);
        assert!(magma(0).is_empty());
    }

    #[test]
    fn gradient_hits_both_ends() {
        let colors = gradient(5, &[(0, 0, 0), (255, 255, 255)]);
        assert_eq!(colors[0], Color32::from_rgb(0, 0, 0));
        assert_eq!(colors[4], Color32::from_rgb(255, 255, 255));
    }

    #[test]
    fn pastel_hues_are_distinct() {
        let colors = pastel(3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
