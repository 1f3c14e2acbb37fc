use crate::global_constants::SENTINEL_RGB;

/// A 24-bit color sampled from the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness as percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl PixelColor {
    pub const SENTINEL: PixelColor = PixelColor::from_rgb(SENTINEL_RGB.0, SENTINEL_RGB.1, SENTINEL_RGB.2);

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_hsl();
        let hue = hsl.hue.round() as u32 % 360;

        format!(
            "hsl({}, {}%, {}%)",
            hue,
            hsl.saturation.round() as u32,
            hsl.lightness.round() as u32
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        let red = self.red as f64 / 255.0;
        let green = self.green as f64 / 255.0;
        let blue = self.blue as f64 / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue_sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Hsl {
            hue: hue_sector * 60.0,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
        }
    }
}

impl Hsl {
    pub fn to_color(&self) -> PixelColor {
        let saturation = (self.saturation / 100.0).clamp(0.0, 1.0);
        let lightness = (self.lightness / 100.0).clamp(0.0, 1.0);

        if saturation == 0.0 {
            let gray = to_channel(lightness);
            return PixelColor::from_rgb(gray, gray, gray);
        }

        let upper = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let lower = 2.0 * lightness - upper;
        let hue = self.hue.rem_euclid(360.0) / 360.0;

        PixelColor::from_rgb(
            to_channel(hue_to_component(lower, upper, hue + 1.0 / 3.0)),
            to_channel(hue_to_component(lower, upper, hue)),
            to_channel(hue_to_component(lower, upper, hue - 1.0 / 3.0)),
        )
    }
}

fn hue_to_component(lower: f64, upper: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);

    if hue < 1.0 / 6.0 {
        lower + (upper - lower) * 6.0 * hue
    } else if hue < 0.5 {
        upper
    } else if hue < 2.0 / 3.0 {
        lower + (upper - lower) * (2.0 / 3.0 - hue) * 6.0
    } else {
        lower
    }
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
