//! Static filter catalog.
//!
//! Every selectable filter is a [`FilterId`] with an immutable
//! [`FilterDescriptor`] in a fixed catalog order; the ordinal doubles as
//! the cycling index. The descriptor carries everything the engine needs
//! to materialize a live instance: shader family, family submode, and
//! whether the strength slider applies.

use chroma_core::ShaderFamily;
use serde::{Deserialize, Serialize};

/// Fallback filter when a persisted name is unrecognized.
pub const DEFAULT_FILTER: FilterId = FilterId::DeuterCorrection;

/// Identifier of a selectable filter. Ordinal = catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FilterId {
    ProtanCorrection = 0,
    ProtanCorrectionHighContrast = 1,
    DeuterCorrection = 2,
    DeuterCorrectionHighContrast = 3,
    TritanCorrection = 4,
    ProtanSimulation = 5,
    DeuterSimulation = 6,
    TritanSimulation = 7,
    ColorMixerGBR = 8,
    ColorMixerBRG = 9,
    Desaturation = 10,
    LightnessInversion = 11,
    ColorInversion = 12,
}

impl FilterId {
    /// Stable name used as the persisted string form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProtanCorrection => "ProtanCorrection",
            Self::ProtanCorrectionHighContrast => "ProtanCorrectionHighContrast",
            Self::DeuterCorrection => "DeuterCorrection",
            Self::DeuterCorrectionHighContrast => "DeuterCorrectionHighContrast",
            Self::TritanCorrection => "TritanCorrection",
            Self::ProtanSimulation => "ProtanSimulation",
            Self::DeuterSimulation => "DeuterSimulation",
            Self::TritanSimulation => "TritanSimulation",
            Self::ColorMixerGBR => "ColorMixerGBR",
            Self::ColorMixerBRG => "ColorMixerBRG",
            Self::Desaturation => "Desaturation",
            Self::LightnessInversion => "LightnessInversion",
            Self::ColorInversion => "ColorInversion",
        }
    }

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    const fn from_ordinal(ordinal: usize) -> Self {
        match ordinal {
            0 => Self::ProtanCorrection,
            1 => Self::ProtanCorrectionHighContrast,
            2 => Self::DeuterCorrection,
            3 => Self::DeuterCorrectionHighContrast,
            4 => Self::TritanCorrection,
            5 => Self::ProtanSimulation,
            6 => Self::DeuterSimulation,
            7 => Self::TritanSimulation,
            8 => Self::ColorMixerGBR,
            9 => Self::ColorMixerBRG,
            10 => Self::Desaturation,
            11 => Self::LightnessInversion,
            _ => Self::ColorInversion,
        }
    }

    /// Next filter in catalog order, wrapping at the end.
    pub const fn next(self) -> Self {
        Self::from_ordinal((self.ordinal() + 1) % CATALOG_LEN)
    }

    /// Previous filter in catalog order, wrapping at the start.
    pub const fn previous(self) -> Self {
        Self::from_ordinal((self.ordinal() + CATALOG_LEN - 1) % CATALOG_LEN)
    }
}

/// Immutable description of one catalog entry.
#[derive(Debug)]
pub struct FilterDescriptor {
    pub id: FilterId,
    /// 2–3 character label for compact panel display.
    pub short_label: &'static str,
    pub long_label: &'static str,
    pub family: ShaderFamily,
    /// Family-specific submode; desaturation has none.
    pub mode: Option<u8>,
    /// Whether the strength slider applies to this filter.
    pub strength_adjustable: bool,
}

const CATALOG_LEN: usize = 13;

static CATALOG: [FilterDescriptor; CATALOG_LEN] = [
    FilterDescriptor {
        id: FilterId::ProtanCorrection,
        short_label: "PC",
        long_label: "Protanopia Correction",
        family: ShaderFamily::Daltonism,
        mode: Some(0),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::ProtanCorrectionHighContrast,
        short_label: "PHC",
        long_label: "Protanopia High Contrast",
        family: ShaderFamily::Daltonism,
        mode: Some(1),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::DeuterCorrection,
        short_label: "DC",
        long_label: "Deuteranopia Correction",
        family: ShaderFamily::Daltonism,
        mode: Some(2),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::DeuterCorrectionHighContrast,
        short_label: "DHC",
        long_label: "Deuteranopia High Contrast",
        family: ShaderFamily::Daltonism,
        mode: Some(3),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::TritanCorrection,
        short_label: "TC",
        long_label: "Tritanopia Correction",
        family: ShaderFamily::Daltonism,
        mode: Some(4),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::ProtanSimulation,
        short_label: "PS",
        long_label: "Protanopia Simulation",
        family: ShaderFamily::Daltonism,
        mode: Some(5),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::DeuterSimulation,
        short_label: "DS",
        long_label: "Deuteranopia Simulation",
        family: ShaderFamily::Daltonism,
        mode: Some(6),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::TritanSimulation,
        short_label: "TS",
        long_label: "Tritanopia Simulation",
        family: ShaderFamily::Daltonism,
        mode: Some(7),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::ColorMixerGBR,
        short_label: "GBR",
        long_label: "Channel Mixer - GBR",
        family: ShaderFamily::ChannelMixer,
        mode: Some(0),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::ColorMixerBRG,
        short_label: "BRG",
        long_label: "Channel Mixer - BRG",
        family: ShaderFamily::ChannelMixer,
        mode: Some(1),
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::Desaturation,
        short_label: "DES",
        long_label: "Desaturation",
        family: ShaderFamily::Desaturation,
        mode: None,
        strength_adjustable: true,
    },
    FilterDescriptor {
        id: FilterId::LightnessInversion,
        short_label: "LI",
        long_label: "Lightness Inversion",
        family: ShaderFamily::Inversion,
        mode: Some(0),
        strength_adjustable: false,
    },
    FilterDescriptor {
        id: FilterId::ColorInversion,
        short_label: "CI",
        long_label: "Color Inversion",
        family: ShaderFamily::Inversion,
        mode: Some(2),
        strength_adjustable: false,
    },
];

/// The full catalog in stable order.
pub fn catalog() -> &'static [FilterDescriptor] {
    &CATALOG
}

/// Descriptor of a filter.
pub fn descriptor(id: FilterId) -> &'static FilterDescriptor {
    &CATALOG[id.ordinal()]
}

/// Look up a catalog entry by its persisted name.
pub fn by_name(name: &str) -> Option<&'static FilterDescriptor> {
    CATALOG.iter().find(|d| d.id.name() == name)
}

/// The correction / high-contrast partner of a filter, if it has one.
pub fn paired(id: FilterId) -> Option<FilterId> {
    match id {
        FilterId::ProtanCorrection => Some(FilterId::ProtanCorrectionHighContrast),
        FilterId::ProtanCorrectionHighContrast => Some(FilterId::ProtanCorrection),
        FilterId::DeuterCorrection => Some(FilterId::DeuterCorrectionHighContrast),
        FilterId::DeuterCorrectionHighContrast => Some(FilterId::DeuterCorrection),
        _ => None,
    }
}
