//! Terminal stand-ins for image assets: one glyph and a tint per asset id.

use ratatui::style::Color;

use crate::core::catalog::{AssetId, ResourceProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GlyphResources;

impl ResourceProvider for GlyphResources {
    type Handle = Glyph;

    fn resolve(&self, id: &AssetId) -> Glyph {
        let id = id.as_str();
        let (symbol, color) = match id {
            "luffy" => ("👒", Color::Yellow),
            "movies" => ("🎬", Color::LightRed),
            "onepiece_red" => ("🎤", Color::Red),
            "onepiece_stampede" => ("⚔", Color::LightYellow),
            "eiichiro_oda" => ("✒", Color::White),
            "onepiecebg" => ("🌊", Color::Blue),
            _ if id.starts_with("episodes") => ("📺", Color::Cyan),
            _ if id.starts_with("ep") => ("🎞", Color::LightCyan),
            _ if id.contains("movie") || id.starts_with("onepiece") => ("🎬", Color::LightRed),
            _ => ("▣", Color::Gray),
        };
        Glyph { symbol, color }
    }
}
