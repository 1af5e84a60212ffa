// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Catalog of business support services advertised on the landing page.

/// One advertised service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    PresentationDesign,
    AudioVisualProduction,
    TranslationServices,
    GraphicDesign,
    ResearchAnalytics,
    DataProcessing,
}

impl Service {
    /// Display order used by every layout.
    pub const ALL: [Service; 6] = [
        Service::PresentationDesign,
        Service::AudioVisualProduction,
        Service::TranslationServices,
        Service::GraphicDesign,
        Service::ResearchAnalytics,
        Service::DataProcessing,
    ];

    /// Card heading.
    pub fn title(self) -> &'static str {
        match self {
            Service::PresentationDesign => "Presentation Design",
            Service::AudioVisualProduction => "Audio - Visual Production",
            Service::TranslationServices => "Translation Services",
            Service::GraphicDesign => "Graphic Design",
            Service::ResearchAnalytics => "Research & Analytics",
            Service::DataProcessing => "Data Processing",
        }
    }

    /// Card body copy.
    pub fn blurb(self) -> &'static str {
        "Lorem ipsum dolor sit amet, lorem ipsum dolor sit amet. Lorem ipsum dolor sit amet"
    }
}
