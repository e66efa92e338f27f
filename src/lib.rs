//! Shot-list numbering for stop-motion and brickfilm productions.
//!
//! A project holds scenes, a scene holds shots, and every shot is labelled with a
//! *shotcode* such as `03-020` that ends up on physical files and folders. Those
//! codes must stay put once used, yet shots keep being inserted, removed and
//! reordered while the film is made.
//!
//! # Numbering
//!
//! - **Scenes** are numbered by position, 1-based, unless their number is locked
//!   ([`scene_number`]).
//! - **Shots** are numbered sparsely in steps of ten. An unlocked shot takes the
//!   next multiple of ten after the shot before it, unless a locked number is in
//!   the way, in which case it takes the midpoint of the remaining gap
//!   ([`next_shot_auto_number`], [`resolve_shot_numbers`]).
//! - A number becomes locked ([`NumberLock::Locked`]) when its code is copied,
//!   when work on the shot starts, or when the user types one in. Locked numbers
//!   are never reassigned.
//!
//! Everything in the numbering core is pure: results depend only on the inputs,
//! and no state is kept between calls.
//!
//! # Projects
//!
//! [`Project`] applies the editing operations of a shot list (insert, delete,
//! reorder, lock, edit, status changes) to owned data, and [`Project::sheet`]
//! resolves every code for display. [`ProjectFile`] is the JSON import/export
//! format.
#![forbid(unsafe_code)]

mod foundation;
mod model;
mod numbering;

pub use foundation::core::{NumberLock, SCENE_CODE_WIDTH, SHOT_CODE_WIDTH, SHOT_NUMBER_STEP};
pub use foundation::error::{ShotcodeError, ShotcodeResult};
pub use foundation::ordering::ReferenceOrder;
pub use model::file::{ProjectFile, SceneRecord, ShotRecord};
pub use model::project::{
    DEFAULT_PROJECT_NAME, Project, Scene, SceneId, ScenePatch, Shot, ShotId, ShotPatch,
};
pub use model::sheet::{SceneSheet, ShotRow, ShotSheet};
pub use model::status::{ShotStatus, StatusFilter};
pub use numbering::code::{ShotCode, shot_code};
pub use numbering::scene::{resolve_scene_numbers, scene_number};
pub use numbering::shot::{next_shot_auto_number, resolve_shot_numbers};
