use serde::{Serialize, Serializer};
use std::fmt;

/// The value a stat bar is measured against.
pub const MAX_STAT: f64 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Color of a stat bar: red up to 50, yellow up to 90, green up to 190 and
/// blue beyond.
///
/// Bands are not continuous at their edges. Channels that fall outside of
/// `0..=255` are clamped, like a browser does with `rgb()`.
pub fn of(value: u32) -> Rgb {
    let value = f64::from(value);

    if value <= 50.0 {
        let gb = channel(value / 50.0 * 50.0);

        Rgb::new(255, gb, gb)
    } else if value <= 90.0 {
        Rgb::new(255, 255, channel((value - 50.0) / 50.0 * 50.0))
    } else if value <= 190.0 {
        let rb = channel((value - 100.0) / 100.0 * 50.0);

        Rgb::new(rb, 255, rb)
    } else {
        let rg = channel((value - 200.0) / 55.0 * 50.0);

        Rgb::new(rg, rg, 255)
    }
}

/// Width of a stat bar, in percent. Not clamped.
pub fn width(value: u32) -> f64 {
    f64::from(value) / MAX_STAT * 100.0
}

fn channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(of(0), Rgb::new(255, 0, 0));
        assert_eq!(of(50), Rgb::new(255, 50, 50));
        assert_eq!(of(51), Rgb::new(255, 255, 1));
        assert_eq!(of(90), Rgb::new(255, 255, 40));
        assert_eq!(of(91), Rgb::new(0, 255, 0));
        assert_eq!(of(190), Rgb::new(45, 255, 45));
        assert_eq!(of(191), Rgb::new(0, 0, 255));
        assert_eq!(of(255), Rgb::new(50, 50, 255));
    }

    #[test]
    fn green_and_blue_never_decrease_within_a_band() {
        for band in [0..=50, 51..=90] {
            let colors: Vec<_> = band.map(of).collect();

            assert!(colors.windows(2).all(|pair| {
                pair[0].g <= pair[1].g && pair[0].b <= pair[1].b
            }));
        }
    }

    #[test]
    fn renders_as_css() {
        assert_eq!(of(100).to_string(), "rgb(0, 255, 0)");
        assert_eq!(of(0).to_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn width_is_unclamped() {
        assert_eq!(width(0), 0.0);
        assert_eq!(width(255), 100.0);
        assert!(width(300) > 100.0);
    }
}
