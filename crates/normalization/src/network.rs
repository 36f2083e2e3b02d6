//! Network identifiers and protocol families

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CustomizationError;

/// Upstream protocol family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// XML based EFA backends
    Efa,
    /// JSON client interface of HAFAS backends
    Hafas,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Efa => write!(f, "EFA"),
            Self::Hafas => write!(f, "HAFAS"),
        }
    }
}

/// Every transit network with a customization unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkId {
    // EFA
    Vrr,
    Vvs,
    Mvv,
    Kvv,
    Vvo,
    Vgn,
    Bayern,
    Nvbw,
    Ding,
    Vmv,
    Linz,
    Stv,
    Vor,
    Vvt,
    Sydney,
    Gvh,
    Bsvag,
    Vms,
    AvvAugsburg,
    // HAFAS
    Db,
    Vbb,
    Rmv,
    Nvv,
    Vbn,
    Sbb,
    Oebb,
    Zvv,
    Sh,
    Invg,
    Vgs,
    Vmt,
    Luxembourg,
    Svv,
    AvvAachen,
}

impl NetworkId {
    /// All networks in declaration order
    pub const ALL: [Self; 34] = [
        Self::Vrr,
        Self::Vvs,
        Self::Mvv,
        Self::Kvv,
        Self::Vvo,
        Self::Vgn,
        Self::Bayern,
        Self::Nvbw,
        Self::Ding,
        Self::Vmv,
        Self::Linz,
        Self::Stv,
        Self::Vor,
        Self::Vvt,
        Self::Sydney,
        Self::Gvh,
        Self::Bsvag,
        Self::Vms,
        Self::AvvAugsburg,
        Self::Db,
        Self::Vbb,
        Self::Rmv,
        Self::Nvv,
        Self::Vbn,
        Self::Sbb,
        Self::Oebb,
        Self::Zvv,
        Self::Sh,
        Self::Invg,
        Self::Vgs,
        Self::Vmt,
        Self::Luxembourg,
        Self::Svv,
        Self::AvvAachen,
    ];

    /// Protocol family spoken by the network's backend
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::Vrr
            | Self::Vvs
            | Self::Mvv
            | Self::Kvv
            | Self::Vvo
            | Self::Vgn
            | Self::Bayern
            | Self::Nvbw
            | Self::Ding
            | Self::Vmv
            | Self::Linz
            | Self::Stv
            | Self::Vor
            | Self::Vvt
            | Self::Sydney
            | Self::Gvh
            | Self::Bsvag
            | Self::Vms
            | Self::AvvAugsburg => Protocol::Efa,
            Self::Db
            | Self::Vbb
            | Self::Rmv
            | Self::Nvv
            | Self::Vbn
            | Self::Sbb
            | Self::Oebb
            | Self::Zvv
            | Self::Sh
            | Self::Invg
            | Self::Vgs
            | Self::Vmt
            | Self::Luxembourg
            | Self::Svv
            | Self::AvvAachen => Protocol::Hafas,
        }
    }

    /// Stable identifier used in configuration and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vrr => "vrr",
            Self::Vvs => "vvs",
            Self::Mvv => "mvv",
            Self::Kvv => "kvv",
            Self::Vvo => "vvo",
            Self::Vgn => "vgn",
            Self::Bayern => "bayern",
            Self::Nvbw => "nvbw",
            Self::Ding => "ding",
            Self::Vmv => "vmv",
            Self::Linz => "linz",
            Self::Stv => "stv",
            Self::Vor => "vor",
            Self::Vvt => "vvt",
            Self::Sydney => "sydney",
            Self::Gvh => "gvh",
            Self::Bsvag => "bsvag",
            Self::Vms => "vms",
            Self::AvvAugsburg => "avv-augsburg",
            Self::Db => "db",
            Self::Vbb => "vbb",
            Self::Rmv => "rmv",
            Self::Nvv => "nvv",
            Self::Vbn => "vbn",
            Self::Sbb => "sbb",
            Self::Oebb => "oebb",
            Self::Zvv => "zvv",
            Self::Sh => "sh",
            Self::Invg => "invg",
            Self::Vgs => "vgs",
            Self::Vmt => "vmt",
            Self::Luxembourg => "luxembourg",
            Self::Svv => "svv",
            Self::AvvAachen => "avv-aachen",
        }
    }

    /// Human-readable network name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vrr => "Verkehrsverbund Rhein-Ruhr",
            Self::Vvs => "Verkehrs- und Tarifverbund Stuttgart",
            Self::Mvv => "Münchner Verkehrs- und Tarifverbund",
            Self::Kvv => "Karlsruher Verkehrsverbund",
            Self::Vvo => "Verkehrsverbund Oberelbe",
            Self::Vgn => "Verkehrsverbund Großraum Nürnberg",
            Self::Bayern => "Bayern",
            Self::Nvbw => "Nahverkehrsgesellschaft Baden-Württemberg",
            Self::Ding => "Donau-Iller-Nahverkehrsverbund",
            Self::Vmv => "Verkehrsgesellschaft Mecklenburg-Vorpommern",
            Self::Linz => "Linz AG Linien",
            Self::Stv => "Steirischer Verkehrsverbund",
            Self::Vor => "Verkehrsverbund Ost-Region",
            Self::Vvt => "Verkehrsverbund Tirol",
            Self::Sydney => "Transport for NSW",
            Self::Gvh => "Großraum-Verkehr Hannover",
            Self::Bsvag => "Braunschweiger Verkehrs-GmbH",
            Self::Vms => "Verkehrsverbund Mittelsachsen",
            Self::AvvAugsburg => "Augsburger Verkehrs- und Tarifverbund",
            Self::Db => "Deutsche Bahn",
            Self::Vbb => "Verkehrsverbund Berlin-Brandenburg",
            Self::Rmv => "Rhein-Main-Verkehrsverbund",
            Self::Nvv => "Nordhessischer Verkehrsverbund",
            Self::Vbn => "Verkehrsverbund Bremen/Niedersachsen",
            Self::Sbb => "Schweizerische Bundesbahnen",
            Self::Oebb => "Österreichische Bundesbahnen",
            Self::Zvv => "Zürcher Verkehrsverbund",
            Self::Sh => "Nahverkehrsverbund Schleswig-Holstein",
            Self::Invg => "Ingolstädter Verkehrsgesellschaft",
            Self::Vgs => "Verkehrsverbund Saar",
            Self::Vmt => "Verkehrsverbund Mittelthüringen",
            Self::Luxembourg => "Mobilitéitszentral Luxembourg",
            Self::Svv => "Salzburger Verkehrsverbund",
            Self::AvvAachen => "Aachener Verkehrsverbund",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NetworkId {
    type Err = CustomizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| CustomizationError::UnknownNetwork(s.to_string()))
    }
}
