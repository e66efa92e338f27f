use super::*;

const SAMPLE: &str = r#"{
  "_id": "p1",
  "name": "Brick Heist",
  "scenes": [
    {
      "_id": "intro",
      "lockedNumber": null,
      "description": "Opening",
      "shots": [
        { "_id": "a", "status": "animated", "lockedNumber": 10, "description": "Wide", "location": "Int. Garden", "notes": "" },
        { "_id": "b", "status": "default", "description": "Close", "location": "", "notes": "redo" }
      ]
    },
    {
      "lockedNumber": 5,
      "description": "",
      "shots": [
        { "status": "default", "lockedNumber": null, "description": "", "location": "Ext. House", "notes": "", "animated": true }
      ]
    }
  ]
}"#;

#[test]
fn imports_scenes_shots_and_locks() {
    let project = ProjectFile::from_reader(SAMPLE.as_bytes())
        .unwrap()
        .into_project()
        .unwrap();
    assert_eq!(project.id.as_deref(), Some("p1"));
    assert_eq!(project.name, "Brick Heist");
    assert_eq!(project.scenes().len(), 2);

    let intro = &project.scenes()[0];
    assert_eq!(intro.id, SceneId("intro".into()));
    assert_eq!(
        intro.shot_order,
        vec![ShotId("a".into()), ShotId("b".into())]
    );

    let b = project.shot(&ShotId("b".into())).unwrap();
    assert_eq!(b.location, None);
    assert_eq!(b.notes, "redo");
    assert_eq!(
        project.shot_code(&ShotId("b".into())).unwrap().to_string(),
        "01-020"
    );

    let second = &project.scenes()[1];
    assert_eq!(second.locked_number, NumberLock::Locked(5));
    let legacy = project.shot(&second.shot_order[0]).unwrap();
    assert_eq!(legacy.status, ShotStatus::Animated);
    assert_eq!(legacy.location.as_deref(), Some("Ext. House"));
}

#[test]
fn missing_name_gets_the_default() {
    let project = ProjectFile::from_reader(r#"{"scenes": []}"#.as_bytes())
        .unwrap()
        .into_project()
        .unwrap();
    assert_eq!(project.name, DEFAULT_PROJECT_NAME);
    assert_eq!(project.id, None);
}

#[test]
fn assigned_ids_do_not_clash_with_explicit_ones() {
    let json = r#"{"scenes": [
        {"description": "", "shots": [
            {"status": "default", "description": "", "location": "", "notes": ""}
        ]},
        {"_id": "sc1", "description": "", "shots": [
            {"_id": "sh1", "status": "default", "description": "", "location": "", "notes": ""}
        ]}
    ]}"#;
    let project = ProjectFile::from_reader(json.as_bytes())
        .unwrap()
        .into_project()
        .unwrap();
    assert_eq!(project.scenes().len(), 2);
    assert_ne!(project.scenes()[0].id, SceneId("sc1".into()));
    assert_eq!(project.shots().count(), 2);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{"scenes": [
        {"_id": "s", "description": "", "shots": [
            {"_id": "x", "status": "default", "description": "", "location": "", "notes": ""}
        ]},
        {"_id": "t", "description": "", "shots": [
            {"_id": "x", "status": "wip", "description": "", "location": "", "notes": ""}
        ]}
    ]}"#;
    let err = ProjectFile::from_reader(json.as_bytes())
        .unwrap()
        .into_project()
        .unwrap_err();
    assert!(matches!(err, ShotcodeError::Validation(_)));

    let json = r#"{"scenes": [
        {"_id": "s", "description": "", "shots": []},
        {"_id": "s", "description": "", "shots": []}
    ]}"#;
    assert!(
        ProjectFile::from_reader(json.as_bytes())
            .unwrap()
            .into_project()
            .is_err()
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ProjectFile::from_reader(r#"{"scenes": [{"description": 3}]}"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, ShotcodeError::Serde(_)));
    let err = ProjectFile::from_reader(
        r#"{"scenes": [{"description": "", "shots": [{"status": "done", "description": "", "location": "", "notes": ""}]}]}"#
            .as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, ShotcodeError::Serde(_)));
}

#[test]
fn export_follows_shot_order() {
    let mut project = Project::new("film");
    let scene = project.create_scene();
    let first = project.create_shot(&scene, None).unwrap();
    let second = project.create_shot(&scene, None).unwrap();
    project.swap_with_previous(&scene, 1).unwrap();
    project.cycle_status(&first).unwrap();
    project.cycle_status(&first).unwrap();

    let file = ProjectFile::from_project(&project).unwrap();
    let shots = &file.scenes[0].shots;
    assert_eq!(shots[0].id.as_ref(), Some(&second));
    assert_eq!(shots[1].id.as_ref(), Some(&first));
    assert_eq!(shots[1].status, ShotStatus::Animated);
    assert_eq!(shots[1].animated, Some(true));
    assert_eq!(shots[1].locked_number, NumberLock::Locked(20));
    assert_eq!(shots[0].location, "");
}

#[test]
fn export_then_import_preserves_the_project() {
    let original = ProjectFile::from_reader(SAMPLE.as_bytes())
        .unwrap()
        .into_project()
        .unwrap();
    let exported = ProjectFile::from_project(&original).unwrap();
    let json = serde_json::to_string(&exported).unwrap();
    let reloaded = ProjectFile::from_reader(json.as_bytes())
        .unwrap()
        .into_project()
        .unwrap();

    assert_eq!(reloaded.scenes(), original.scenes());
    for shot in original.shots() {
        assert_eq!(reloaded.shot(&shot.id).unwrap(), shot);
    }
    assert_eq!(ProjectFile::from_project(&reloaded).unwrap(), exported);
}

#[test]
fn export_writes_camel_case_nullable_locks() {
    let mut project = Project::new("film");
    let scene = project.create_scene();
    project.create_shot(&scene, None).unwrap();
    let value = serde_json::to_value(ProjectFile::from_project(&project).unwrap()).unwrap();
    assert!(value["scenes"][0]["lockedNumber"].is_null());
    assert!(value["scenes"][0]["shots"][0]["lockedNumber"].is_null());
    assert_eq!(value["scenes"][0]["_id"], "sc1");
    assert_eq!(value["name"], "film");
}

#[test]
fn save_and_load_round_trip_on_disk() {
    let dir = std::path::PathBuf::from("target").join("project_file_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("roundtrip.json");

    let mut project = Project::new("on disk");
    let scene = project.create_scene();
    let shot = project.create_shot(&scene, None).unwrap();
    project.lock_shot_code(&shot).unwrap();
    project.save(&path).unwrap();

    let loaded = Project::load(&path).unwrap();
    assert_eq!(loaded.name, "on disk");
    assert_eq!(loaded.shot_code(&shot).unwrap().to_string(), "01-010");
    assert!(loaded.shot(&shot).unwrap().locked_number.is_locked());

    assert!(Project::load(dir.join("missing.json")).is_err());
}
