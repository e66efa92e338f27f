use crate::{
    foundation::error::ShotcodeResult,
    model::{
        project::{Project, SceneId, ShotId},
        status::{ShotStatus, StatusFilter},
    },
    numbering::code::ShotCode,
};

/// A project with every scene and shot number resolved, ready to display.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ShotSheet {
    /// Project name.
    pub project: String,
    /// Visible scenes in project order.
    pub scenes: Vec<SceneSheet>,
}

/// One scene of a [`ShotSheet`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneSheet {
    pub scene_id: SceneId,
    /// Resolved scene number.
    pub number: u32,
    pub locked: bool,
    pub description: String,
    /// Visible shots in shot order.
    pub rows: Vec<ShotRow>,
}

/// One shot of a [`SceneSheet`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct ShotRow {
    pub shot_id: ShotId,
    /// Position in the scene's full shot order, filtered-out shots included.
    pub index_in_scene: usize,
    /// Resolved shot number.
    pub number: u32,
    pub code: ShotCode,
    pub status: ShotStatus,
    pub locked: bool,
    pub location: Option<String>,
    pub description: String,
    pub notes: String,
}

impl ShotSheet {
    /// All visible rows, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ShotRow> {
        self.scenes.iter().flat_map(|s| s.rows.iter())
    }
}

impl Project {
    /// Resolve every number in the project and lay out the visible shots.
    ///
    /// Numbers are always resolved over each scene's full shot list; `filter`
    /// only hides rows, so a shot's code does not depend on what is shown.
    /// A scene whose shots are all hidden is left out; an empty scene is kept.
    #[tracing::instrument(skip(self, filter), fields(project = %self.name))]
    pub fn sheet(&self, filter: &StatusFilter) -> ShotcodeResult<ShotSheet> {
        let mut scenes = Vec::with_capacity(self.scenes().len());
        for scene in self.scenes() {
            let scene_number = self.scene_number(&scene.id)?;
            let numbered = self.numbered_shots(&scene.id)?;
            let total = numbered.len();

            let rows: Vec<ShotRow> = numbered
                .into_iter()
                .enumerate()
                .filter(|(_, (shot, _))| filter.shows(shot.status))
                .map(|(index_in_scene, (shot, number))| ShotRow {
                    shot_id: shot.id.clone(),
                    index_in_scene,
                    number,
                    code: ShotCode::new(scene_number, number),
                    status: shot.status,
                    locked: shot.locked_number.is_locked(),
                    location: shot.location.clone(),
                    description: shot.description.clone(),
                    notes: shot.notes.clone(),
                })
                .collect();

            if rows.is_empty() && total != 0 {
                continue;
            }
            scenes.push(SceneSheet {
                scene_id: scene.id.clone(),
                number: scene_number,
                locked: scene.locked_number.is_locked(),
                description: scene.description.clone(),
                rows,
            });
        }

        tracing::debug!(scenes = scenes.len(), "resolved shot sheet");
        Ok(ShotSheet {
            project: self.name.clone(),
            scenes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/sheet.rs"]
mod tests;
