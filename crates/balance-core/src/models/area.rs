//! Life areas a task can belong to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven fixed life areas.
///
/// The declaration order is the canonical display order; `Ord` follows it so
/// that ordered collections of areas iterate in that order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Area {
    /// Body & Health
    #[serde(rename = "BODY")]
    Body,

    /// Nutrition
    #[serde(rename = "FOOD")]
    Nutrition,

    /// Sleep
    #[serde(rename = "SLEEP")]
    Sleep,

    /// Home & Organization
    #[serde(rename = "HOME")]
    Home,

    /// Appearance & Self-Care
    #[serde(rename = "LOOKS")]
    Appearance,

    /// Personal Finance
    #[serde(rename = "FINANCE")]
    Finance,

    /// Career & Focus
    #[serde(rename = "CAREER")]
    Career,
}

impl Area {
    /// Every area in display order.
    pub const ALL: [Area; 7] = [
        Area::Body,
        Area::Nutrition,
        Area::Sleep,
        Area::Home,
        Area::Appearance,
        Area::Finance,
        Area::Career,
    ];

    /// Stable code used in serialized data.
    pub fn code(&self) -> &'static str {
        match self {
            Area::Body => "BODY",
            Area::Nutrition => "FOOD",
            Area::Sleep => "SLEEP",
            Area::Home => "HOME",
            Area::Appearance => "LOOKS",
            Area::Finance => "FINANCE",
            Area::Career => "CAREER",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Area::Body => "Body & Health",
            Area::Nutrition => "Nutrition",
            Area::Sleep => "Sleep",
            Area::Home => "Home & Organization",
            Area::Appearance => "Appearance & Self-Care",
            Area::Finance => "Personal Finance",
            Area::Career => "Career & Focus",
        }
    }
}

impl FromStr for Area {
    type Err = String;

    /// Accepts either the serialized code or the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "body" => Ok(Area::Body),
            "food" | "nutrition" => Ok(Area::Nutrition),
            "sleep" => Ok(Area::Sleep),
            "home" => Ok(Area::Home),
            "looks" | "appearance" => Ok(Area::Appearance),
            "finance" => Ok(Area::Finance),
            "career" => Ok(Area::Career),
            _ => Err(format!("Invalid area: {s}")),
        }
    }
}
