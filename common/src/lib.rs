//! Persona AI Common Library
//!
//! CLIとWeb(WASM)で共有されるコントローラ・型・表示モデル

pub mod types;
pub mod error;
pub mod files;
pub mod theme;
pub mod view;
pub mod render;
pub mod particles;
pub mod controller;

pub use types::{AnalysisResult, ErrorBody, ExtractedSection, HealthStatus, Metadata, SubSectionAnalysis};
pub use error::{Error, Result};
pub use files::{FileEntry, NamedFile, SelectedFiles, ACCEPTED_MIME};
pub use theme::{MemoryThemeStore, Theme, ThemeStore, THEME_KEY};
pub use view::{ViewEvent, ViewState};
pub use render::{AnalysisCard, DetailView, MetadataItem, ResultsView, SectionCard};
pub use particles::{Link, Particle, ParticleField, LINK_DISTANCE, PARTICLE_COUNT, PARTICLE_FILL};
pub use controller::{check_health, AnalysisService, PageController, SubmissionForm};
