use std::{collections::BTreeMap, fmt};

use crate::{
    foundation::{
        core::NumberLock,
        error::{ShotcodeError, ShotcodeResult},
        ordering::ReferenceOrder,
    },
    model::status::ShotStatus,
    numbering::{
        code::ShotCode,
        scene::scene_number,
        shot::resolve_shot_numbers,
    },
};

/// Name given to projects created without one.
pub const DEFAULT_PROJECT_NAME: &str = "New Project";

/// Identifier of a scene within a project.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SceneId(pub String);

/// Identifier of a shot within a project.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ShotId(pub String);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub id: SceneId,
    pub locked_number: NumberLock,
    pub description: String,
    /// Explicit order of this scene's shots.
    pub shot_order: Vec<ShotId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shot {
    pub id: ShotId,
    pub scene: SceneId,
    pub status: ShotStatus,
    pub locked_number: NumberLock,
    pub description: String,
    pub location: Option<String>,
    pub notes: String,
}

/// Partial update of a scene; `None` fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct ScenePatch {
    pub locked_number: Option<NumberLock>,
    pub description: Option<String>,
    pub shot_order: Option<Vec<ShotId>>,
}

/// Partial update of a shot; `None` fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct ShotPatch {
    pub status: Option<ShotStatus>,
    pub locked_number: Option<NumberLock>,
    pub description: Option<String>,
    /// `Some(None)` clears the location. Blank strings are stored as `None`.
    pub location: Option<Option<String>>,
    pub notes: Option<String>,
}

/// A project: ordered scenes, and a table of shots ordered per scene by the
/// scene's `shot_order`.
#[derive(Clone, Debug)]
pub struct Project {
    pub id: Option<String>,
    pub name: String,
    scenes: Vec<Scene>,
    shots: BTreeMap<ShotId, Shot>,
    next_id: u64,
}

impl Default for Project {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            scenes: Vec::new(),
            shots: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Scenes in project order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Every shot, in no particular order.
    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.shots.values()
    }

    pub fn scene(&self, id: &SceneId) -> ShotcodeResult<&Scene> {
        self.scenes
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| unknown_scene(id))
    }

    pub fn shot(&self, id: &ShotId) -> ShotcodeResult<&Shot> {
        self.shots.get(id).ok_or_else(|| unknown_shot(id))
    }

    /// Zero-based position of a scene in the project.
    pub fn scene_index(&self, id: &SceneId) -> ShotcodeResult<usize> {
        self.scenes
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| unknown_scene(id))
    }

    /// Append an empty, unlocked scene.
    pub fn create_scene(&mut self) -> SceneId {
        let id = self.fresh_scene_id();
        self.scenes.push(Scene {
            id: id.clone(),
            locked_number: NumberLock::Auto,
            description: String::new(),
            shot_order: Vec::new(),
        });
        id
    }

    pub fn update_scene(&mut self, id: &SceneId, patch: ScenePatch) -> ShotcodeResult<()> {
        let scene = self.scene_mut(id)?;
        if let Some(lock) = patch.locked_number {
            scene.locked_number = lock;
        }
        if let Some(description) = patch.description {
            scene.description = description;
        }
        if let Some(order) = patch.shot_order {
            scene.shot_order = order;
        }
        Ok(())
    }

    /// Remove a scene together with all of its shots.
    pub fn delete_scene(&mut self, id: &SceneId) -> ShotcodeResult<()> {
        let index = self.scene_index(id)?;
        let scene = self.scenes.remove(index);
        self.shots.retain(|_, shot| shot.scene != scene.id);
        Ok(())
    }

    /// Insert a new shot into a scene at `at_index` of its shot order, or at the end.
    ///
    /// The shot takes the location of the nearest shot before it (or, at the
    /// front, the shot it is inserted before), since neighbouring shots are
    /// usually filmed on the same set.
    pub fn create_shot(
        &mut self,
        scene: &SceneId,
        at_index: Option<usize>,
    ) -> ShotcodeResult<ShotId> {
        // Refuse to grow a scene whose order has drifted from its shots.
        self.scene_shots(scene)?;
        let order = &self.scene(scene)?.shot_order;
        let index = at_index.unwrap_or(order.len());
        if index > order.len() {
            return Err(ShotcodeError::validation(format!(
                "shot index {index} is past the end of scene '{scene}' ({} shots)",
                order.len()
            )));
        }
        // Neighbours are looked up by id; the order may name deleted shots.
        let existing = |id: &ShotId| self.shots.get(id).filter(|s| &s.scene == scene);
        let before = order[..index].iter().rev().find_map(existing);
        let after = order[index..].iter().find_map(existing);
        let location = before
            .or(after)
            .and_then(|neighbour| neighbour.location.clone());

        let id = self.fresh_shot_id();
        self.shots.insert(
            id.clone(),
            Shot {
                id: id.clone(),
                scene: scene.clone(),
                status: ShotStatus::Default,
                locked_number: NumberLock::Auto,
                description: String::new(),
                location,
                notes: String::new(),
            },
        );
        self.scene_mut(scene)?.shot_order.insert(index, id.clone());
        Ok(id)
    }

    pub fn update_shot(&mut self, id: &ShotId, patch: ShotPatch) -> ShotcodeResult<()> {
        let shot = self.shot_mut(id)?;
        if let Some(status) = patch.status {
            shot.status = status;
        }
        if let Some(lock) = patch.locked_number {
            shot.locked_number = lock;
        }
        if let Some(description) = patch.description {
            shot.description = description;
        }
        if let Some(location) = patch.location {
            shot.location = location.filter(|l| !l.trim().is_empty());
        }
        if let Some(notes) = patch.notes {
            shot.notes = notes;
        }
        Ok(())
    }

    /// Remove a shot and its entry in the scene's shot order.
    pub fn delete_shot(&mut self, id: &ShotId) -> ShotcodeResult<()> {
        let shot = self.shots.remove(id).ok_or_else(|| unknown_shot(id))?;
        if let Ok(scene) = self.scene_mut(&shot.scene) {
            scene.shot_order.retain(|s| s != id);
        }
        Ok(())
    }

    /// Swap the shot at `index` of a scene's shot order with the one before it.
    pub fn swap_with_previous(&mut self, scene: &SceneId, index: usize) -> ShotcodeResult<()> {
        let scene = self.scene_mut(scene)?;
        if index == 0 || index >= scene.shot_order.len() {
            return Err(ShotcodeError::validation(format!(
                "cannot swap shot {index} of scene '{}' with its predecessor",
                scene.id
            )));
        }
        scene.shot_order.swap(index - 1, index);
        Ok(())
    }

    /// A scene's shots, sorted by its shot order.
    ///
    /// Fails with [`ShotcodeError::Ordering`] when a shot of the scene is
    /// missing from the order list.
    pub fn scene_shots(&self, scene: &SceneId) -> ShotcodeResult<Vec<&Shot>> {
        let order = ReferenceOrder::new(self.scene(scene)?.shot_order.iter().cloned());
        let mut shots: Vec<&Shot> = self.shots.values().filter(|s| &s.scene == scene).collect();
        order.sort_by_order(&mut shots, |s| s.id.clone())?;
        Ok(shots)
    }

    /// Resolved display number of a scene.
    pub fn scene_number(&self, id: &SceneId) -> ShotcodeResult<u32> {
        let index = self.scene_index(id)?;
        Ok(scene_number(self.scenes[index].locked_number, index))
    }

    /// A scene's shots in order, paired with their resolved numbers.
    pub fn numbered_shots(&self, scene: &SceneId) -> ShotcodeResult<Vec<(&Shot, u32)>> {
        let shots = self.scene_shots(scene)?;
        let locks: Vec<NumberLock> = shots.iter().map(|s| s.locked_number).collect();
        Ok(shots.into_iter().zip(resolve_shot_numbers(&locks)?).collect())
    }

    /// Resolved display number of a shot.
    pub fn shot_number(&self, id: &ShotId) -> ShotcodeResult<u32> {
        let shot = self.shot(id)?;
        self.numbered_shots(&shot.scene)?
            .into_iter()
            .find(|(s, _)| &s.id == id)
            .map(|(_, n)| n)
            .ok_or_else(|| unknown_shot(id))
    }

    /// Current shotcode of a shot.
    pub fn shot_code(&self, id: &ShotId) -> ShotcodeResult<ShotCode> {
        let scene = self.scene_number(&self.shot(id)?.scene)?;
        Ok(ShotCode::new(scene, self.shot_number(id)?))
    }

    /// The shot currently displayed under `code`.
    pub fn find_by_code(&self, code: ShotCode) -> ShotcodeResult<ShotId> {
        let mut found = Vec::new();
        for scene in &self.scenes {
            if self.scene_number(&scene.id)? != code.scene {
                continue;
            }
            for (shot, number) in self.numbered_shots(&scene.id)? {
                if number == code.shot {
                    found.push(shot.id.clone());
                }
            }
        }
        match found.len() {
            0 => Err(ShotcodeError::validation(format!("no shot has code {code}"))),
            1 => Ok(found.remove(0)),
            n => Err(ShotcodeError::validation(format!(
                "shotcode {code} is ambiguous ({n} shots)"
            ))),
        }
    }

    /// Pin a scene's current number.
    pub fn lock_scene_number(&mut self, id: &SceneId) -> ShotcodeResult<u32> {
        let number = self.scene_number(id)?;
        let scene = self.scene_mut(id)?;
        if scene.locked_number.is_locked() {
            return Err(ShotcodeError::validation(format!(
                "scene '{id}' number is already locked"
            )));
        }
        scene.locked_number = NumberLock::Locked(number);
        tracing::debug!(scene = %id, number, "locked scene number");
        Ok(number)
    }

    /// Pin a shot's current number, if not already pinned, and return the code to label files with.
    pub fn lock_shot_code(&mut self, id: &ShotId) -> ShotcodeResult<ShotCode> {
        let code = self.shot_code(id)?;
        let shot = self.shot_mut(id)?;
        if !shot.locked_number.is_locked() {
            shot.locked_number = NumberLock::Locked(code.shot);
            tracing::debug!(shot = %id, %code, "locked shot code");
        }
        Ok(code)
    }

    /// Edit a locked shot number from user input.
    ///
    /// Blank input unlocks the shot and returns `None`. Otherwise the input
    /// must be an integer; it becomes the locked number and the new code is
    /// returned.
    pub fn edit_shot_code(&mut self, id: &ShotId, input: &str) -> ShotcodeResult<Option<ShotCode>> {
        let scene_number = self.scene_number(&self.shot(id)?.scene)?;
        let shot = self.shot_mut(id)?;
        if !shot.locked_number.is_locked() {
            return Err(ShotcodeError::validation(format!(
                "shot '{id}' code is not locked"
            )));
        }

        let input = input.trim();
        if input.is_empty() {
            shot.locked_number = NumberLock::Auto;
            tracing::debug!(shot = %id, "unlocked shot code");
            return Ok(None);
        }

        let number: u32 = input
            .parse()
            .map_err(|_| ShotcodeError::parse(format!("invalid shot number '{input}'")))?;
        shot.locked_number = NumberLock::Locked(number);
        tracing::debug!(shot = %id, number, "edited shot code");
        Ok(Some(ShotCode::new(scene_number, number)))
    }

    /// Advance a shot's status. Starting or finishing a shot pins its number.
    pub fn cycle_status(&mut self, id: &ShotId) -> ShotcodeResult<ShotStatus> {
        let number = self.shot_number(id)?;
        let shot = self.shot_mut(id)?;
        let next = shot.status.next();
        if next.locks_number() && !shot.locked_number.is_locked() {
            shot.locked_number = NumberLock::Locked(number);
            tracing::debug!(shot = %id, number, status = %next, "locked shot code on status change");
        }
        shot.status = next;
        Ok(next)
    }

    /// Flag or unflag a shot as unsure. The number lock is left alone.
    pub fn toggle_unsure(&mut self, id: &ShotId) -> ShotcodeResult<ShotStatus> {
        let shot = self.shot_mut(id)?;
        shot.status = shot.status.toggled_unsure();
        Ok(shot.status)
    }

    /// Add an already-built scene and its shots, in order. Used by import.
    pub(crate) fn insert_scene(&mut self, scene: Scene, shots: Vec<Shot>) -> ShotcodeResult<()> {
        if self.scenes.iter().any(|s| s.id == scene.id) {
            return Err(ShotcodeError::validation(format!(
                "duplicate scene id '{}'",
                scene.id
            )));
        }
        for shot in &shots {
            if self.shots.contains_key(&shot.id) {
                return Err(ShotcodeError::validation(format!(
                    "duplicate shot id '{}'",
                    shot.id
                )));
            }
        }
        for shot in shots {
            self.shots.insert(shot.id.clone(), shot);
        }
        self.scenes.push(scene);
        Ok(())
    }

    pub(crate) fn fresh_scene_id(&mut self) -> SceneId {
        loop {
            let id = SceneId(format!("sc{}", self.bump_id()));
            if !self.scenes.iter().any(|s| s.id == id) {
                return id;
            }
        }
    }

    pub(crate) fn fresh_shot_id(&mut self) -> ShotId {
        loop {
            let id = ShotId(format!("sh{}", self.bump_id()));
            if !self.shots.contains_key(&id) {
                return id;
            }
        }
    }

    fn bump_id(&mut self) -> u64 {
        let n = self.next_id;
        self.next_id += 1;
        n
    }

    fn scene_mut(&mut self, id: &SceneId) -> ShotcodeResult<&mut Scene> {
        self.scenes
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| unknown_scene(id))
    }

    fn shot_mut(&mut self, id: &ShotId) -> ShotcodeResult<&mut Shot> {
        self.shots.get_mut(id).ok_or_else(|| unknown_shot(id))
    }
}

fn unknown_scene(id: &SceneId) -> ShotcodeError {
    ShotcodeError::validation(format!("unknown scene '{id}'"))
}

fn unknown_shot(id: &ShotId) -> ShotcodeError {
    ShotcodeError::validation(format!("unknown shot '{id}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/model/project.rs"]
mod tests;
