use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::NumberLock,
        error::{ShotcodeError, ShotcodeResult},
    },
    model::{
        project::{DEFAULT_PROJECT_NAME, Project, Scene, SceneId, Shot, ShotId},
        status::ShotStatus,
    },
};

/// Whole-project import/export document.
///
/// Scenes are listed in project order and each scene lists its shots in shot
/// order. Ids are optional; missing ones are assigned on import.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectFile {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scenes: Vec<SceneRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SceneId>,
    #[serde(default)]
    pub locked_number: NumberLock,
    pub description: String,
    pub shots: Vec<ShotRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShotId>,
    pub status: ShotStatus,
    #[serde(default)]
    pub locked_number: NumberLock,
    pub description: String,
    /// Empty when the shot has no location.
    pub location: String,
    pub notes: String,
    /// Legacy done flag, superseded by `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl ProjectFile {
    /// Parse a project file from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShotcodeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShotcodeError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project file from JSON on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShotcodeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open project file '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the project file as pretty-printed JSON.
    pub fn write_path(&self, path: impl AsRef<Path>) -> ShotcodeResult<()> {
        let path = path.as_ref();
        let f = File::create(path)
            .with_context(|| format!("create project file '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.write_all(b"\n")
            .and_then(|()| w.flush())
            .with_context(|| format!("write project file '{}'", path.display()))?;
        Ok(())
    }

    /// Build a [`Project`] from this document.
    ///
    /// Missing ids are assigned fresh ones that cannot clash with ids present
    /// elsewhere in the file. Duplicate ids are rejected.
    #[tracing::instrument(skip(self), fields(scenes = self.scenes.len()))]
    pub fn into_project(self) -> ShotcodeResult<Project> {
        let mut project = Project::new(self.name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.into()));
        project.id = self.id;

        let reserved_scenes: HashSet<SceneId> =
            self.scenes.iter().filter_map(|s| s.id.clone()).collect();
        let reserved_shots: HashSet<ShotId> = self
            .scenes
            .iter()
            .flat_map(|s| s.shots.iter().filter_map(|shot| shot.id.clone()))
            .collect();

        for record in self.scenes {
            let scene_id = match record.id {
                Some(id) => id,
                None => loop {
                    let id = project.fresh_scene_id();
                    if !reserved_scenes.contains(&id) {
                        break id;
                    }
                },
            };

            let mut shots = Vec::with_capacity(record.shots.len());
            for shot in record.shots {
                let shot_id = match shot.id {
                    Some(id) => id,
                    None => loop {
                        let id = project.fresh_shot_id();
                        if !reserved_shots.contains(&id) {
                            break id;
                        }
                    },
                };
                if shots.iter().any(|s: &Shot| s.id == shot_id) {
                    return Err(ShotcodeError::validation(format!(
                        "duplicate shot id '{shot_id}'"
                    )));
                }
                let status = match (shot.status, shot.animated) {
                    (ShotStatus::Default, Some(true)) => ShotStatus::Animated,
                    (status, _) => status,
                };
                shots.push(Shot {
                    id: shot_id,
                    scene: scene_id.clone(),
                    status,
                    locked_number: shot.locked_number,
                    description: shot.description,
                    location: Some(shot.location).filter(|l| !l.trim().is_empty()),
                    notes: shot.notes,
                });
            }

            let scene = Scene {
                id: scene_id,
                locked_number: record.locked_number,
                description: record.description,
                shot_order: shots.iter().map(|s| s.id.clone()).collect(),
            };
            project.insert_scene(scene, shots)?;
        }

        Ok(project)
    }

    /// Export a [`Project`], writing each scene's shots in shot order.
    #[tracing::instrument(skip(project), fields(project = %project.name))]
    pub fn from_project(project: &Project) -> ShotcodeResult<Self> {
        let mut scenes = Vec::with_capacity(project.scenes().len());
        for scene in project.scenes() {
            let shots = project
                .scene_shots(&scene.id)?
                .into_iter()
                .map(|shot| ShotRecord {
                    id: Some(shot.id.clone()),
                    status: shot.status,
                    locked_number: shot.locked_number,
                    description: shot.description.clone(),
                    location: shot.location.clone().unwrap_or_default(),
                    notes: shot.notes.clone(),
                    animated: Some(shot.status == ShotStatus::Animated),
                })
                .collect();
            scenes.push(SceneRecord {
                id: Some(scene.id.clone()),
                locked_number: scene.locked_number,
                description: scene.description.clone(),
                shots,
            });
        }
        Ok(Self {
            id: project.id.clone(),
            name: Some(project.name.clone()),
            scenes,
        })
    }
}

impl Project {
    /// Load a project from a project file on disk.
    pub fn load(path: impl AsRef<Path>) -> ShotcodeResult<Self> {
        ProjectFile::from_path(path)?.into_project()
    }

    /// Save the project as a project file.
    pub fn save(&self, path: impl AsRef<Path>) -> ShotcodeResult<()> {
        ProjectFile::from_project(self)?.write_path(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/file.rs"]
mod tests;
