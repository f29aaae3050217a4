//! Papillon is a particle-field morph engine for animated landing pages.
//!
//! A cloud of random points eases into a silhouette sampled from an outline, renders once per
//! frame through a [`RenderSurface`], and on completion reveals a call-to-action that hands off
//! to a manifest-driven media [`Gallery`]:
//!
//! - Sample target points from an [`Outline`] with [`sample`]
//! - Drive a [`ParticleSet`] with an [`Animator`] (or a whole page with [`LandingSession`])
//! - Load a [`Manifest`] through a [`ManifestSource`] and show it with [`load_gallery`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod gallery;
pub(crate) mod readiness;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod shape;
pub(crate) mod ui;

pub use crate::foundation::core::{BezPath, Point, Rgba8, Vec2, Vec3, Viewport};
pub use crate::foundation::error::{PapillonError, PapillonResult};

pub use crate::animation::animator::{
    Animator, AnimatorState, CompletionSink, Spin, TickOutcome,
};
pub use crate::animation::clock::AnimationClock;
pub use crate::animation::ease::Ease;
pub use crate::animation::particles::{Lerp, ParticleSet};
pub use crate::config::settings::{AppConfig, CameraConfig, LandingConfig, MorphConfig};
pub use crate::gallery::manifest::{
    Category, Manifest, MediaKind, is_preview_name, normalize_rel_path, preview_file,
    resolve_url,
};
pub use crate::gallery::source::{DirManifestSource, ManifestSource, StaticManifestSource};
pub use crate::gallery::view::{
    CategoryView, Gallery, GalleryCard, GalleryHost, MediaItem, load_gallery,
};
pub use crate::readiness::wait::{
    Readiness, ReadinessOpts, ReadySignal, readiness_channel, wait_until_ready,
};
pub use crate::render::camera::{PerspectiveCamera, ProjectedPoint};
pub use crate::render::cpu::{CpuPointSurface, FrameRGBA};
pub use crate::render::frame_loop::{FrameLoop, FrameTimer, LoopReport};
pub use crate::render::surface::{PointCloud, PointStyle, RecordingSurface, RenderSurface};
pub use crate::session::landing_session::{LandingSession, await_graphics};
pub use crate::shape::butterfly::butterfly_anchors;
pub use crate::shape::outline::{ArcLengthCurve, CurveMapping, Outline, PathCurve};
pub use crate::shape::sampler::{SampleOpts, anchor_index, sample};
pub use crate::ui::host::{ElementState, RecordingUi, UiEvent, UiHost, ids, require_elements};
pub use crate::ui::landing::{EnterOutcome, FallbackNotice, Landing, RevealCallToAction};
