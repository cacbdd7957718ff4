//! # Park Tracks
//!
//! Track path smoothing and cached track mesh generation.
//!
//! ## Architecture
//!
//! ```text
//! PathNodeSource → RawPathNode[] → smoothing → TrackPiece
//!                                                  │
//!                      template ─→ PathExtruder ←──┘
//!                                       │
//!                     GenerationSession caches per PathShapeKey
//! ```
//!
//! ## Components
//!
//! - [`OrientationDecoder`]: engine direction, banking and pitch bytes to
//!   rotations
//! - [`smoothing`]: moving-average positions and interpolated rotations
//! - [`GenerationSession`]: node, piece and mesh caches of one generation run
//! - [`ElementKind`]: the map elements that produce geometry
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GenerationConfig;
//! use park_mesh::IndexedMesh;
//! use park_tracks::{
//!     ElementKind, FootpathElement, GenerationSession, StaticNodeSource, TileLocation,
//! };
//!
//! // A session without track types still places footpaths.
//! let mut session = GenerationSession::new(
//!     StaticNodeSource::new(),
//!     "none",
//!     &IndexedMesh::new(),
//!     GenerationConfig::default(),
//! );
//! let footpath = ElementKind::from(FootpathElement::default());
//! let generated = session
//!     .generate(&footpath, &TileLocation::new(4, 2, 0, 0))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(generated.mesh.triangle_count(), 2);
//! assert_eq!(generated.placement.position.x, 4.5);
//! ```

pub mod element;
pub mod error;
pub mod key;
pub mod node;
pub mod orientation;
pub mod piece;
pub mod session;
pub mod smoothing;
pub mod source;

pub use element::{footpath_mesh, ElementKind, FootpathElement, TileLocation, TrackElement};
pub use error::{TrackError, TrackResult};
pub use key::PathShapeKey;
pub use node::RawPathNode;
pub use orientation::OrientationDecoder;
pub use piece::TrackPiece;
pub use session::{CacheStats, GeneratedElement, GenerationSession, SessionStats};
pub use source::{PathNodeSource, StaticNodeSource};
