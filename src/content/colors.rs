//! Color deck

use crate::error::IndigoResult;
use crate::navigator::Deck;
use lazy_static::lazy_static;

use super::ContentTable;

/// Opaque display color for a swatch
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

    /// Whether dark text reads better than light text on this color
    pub fn is_light(self) -> bool {
        let luma = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        luma > 150.0
    }
}

const RED: Rgb = Rgb::new(255, 59, 48);
const BLUE: Rgb = Rgb::new(0, 122, 255);
const GREEN: Rgb = Rgb::new(52, 199, 89);
const YELLOW: Rgb = Rgb::new(255, 204, 0);
const ORANGE: Rgb = Rgb::new(255, 149, 0);
const PURPLE: Rgb = Rgb::new(175, 82, 222);
const PINK: Rgb = Rgb::new(255, 45, 85);
const BROWN: Rgb = Rgb::new(162, 132, 94);
const GRAY: Rgb = Rgb::new(142, 142, 147);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

const PALETTE: [Rgb; 11] = [
    RED, BLUE, GREEN, YELLOW, ORANGE, PURPLE, PINK, BROWN, GRAY, BLACK, WHITE,
];

const ENGLISH: [&str; 11] = [
    "Red", "Blue", "Green", "Yellow", "Orange", "Purple", "Pink", "Brown", "Gray", "Black",
    "White",
];

const FRENCH: [&str; 11] = [
    "Rouge", "Bleu", "Vert", "Jaune", "Orange", "Violet", "Rose", "Marron", "Gris", "Noir",
    "Blanc",
];

const TWI: [&str; 11] = [
    "Kɔkɔɔ",
    "Bruu",
    "Ahabammono",
    "Akokɔsradee",
    "Akutu",
    "Beredum",
    "Mmɛrɛ",
    "Dodowee",
    "Nsonovee",
    "Tuntum",
    "Fitaa",
];

lazy_static! {
    static ref COLORS: ContentTable<Swatch> =
        build_table().expect("bundled color table is malformed");
}

/// A named color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub name: String,
    pub color: Rgb,
}

pub(crate) fn build_table() -> IndigoResult<ContentTable<Swatch>> {
    let row = |names: &[&str; 11]| {
        names
            .iter()
            .zip(PALETTE)
            .map(|(name, color)| Swatch {
                name: name.to_string(),
                color,
            })
            .collect::<Vec<_>>()
    };
    ContentTable::new(
        "colors",
        vec![
            ("English", row(&ENGLISH)),
            ("French", row(&FRENCH)),
            ("Twi", row(&TWI)),
        ],
    )
}

/// Colors deck; audio clips are keyed by the lowercase color name
#[derive(Debug, Clone, Default)]
pub struct ColorDeck;

impl Deck for ColorDeck {
    type Item = Swatch;

    fn name(&self) -> &'static str {
        "Colors"
    }

    fn table(&self) -> &ContentTable<Swatch> {
        &COLORS
    }

    fn audio_key(&self, item: &Swatch) -> String {
        item.name.to_lowercase()
    }

    fn label(&self, item: &Swatch) -> String {
        item.name.clone()
    }
}
