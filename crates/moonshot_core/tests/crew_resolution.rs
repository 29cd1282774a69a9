use moonshot_core::{
    resolve_crew, Astronaut, CrewRole, DataIntegrityFault, Dataset, Mission, MissionService,
};
use std::collections::HashMap;

fn astronaut_map(ids: &[(&str, &str)]) -> HashMap<String, Astronaut> {
    ids.iter()
        .map(|(id, name)| {
            (
                id.to_string(),
                Astronaut::new(*id, *name, format!("Biography of {name}.")),
            )
        })
        .collect()
}

fn apollo_11() -> Mission {
    let mut mission = Mission::new(11, "First crewed lunar landing.");
    mission.launch_date = chrono::NaiveDate::from_ymd_opt(1969, 7, 16);
    mission.crew = vec![
        CrewRole::new("armstrong", "Commander"),
        CrewRole::new("aldrin", "Lunar Module Pilot"),
    ];
    mission
}

#[test]
fn resolves_crew_in_roster_order() {
    let astronauts = astronaut_map(&[("aldrin", "Buzz Aldrin"), ("armstrong", "Neil Armstrong")]);
    let mission = apollo_11();

    let crew = resolve_crew(&mission, &astronauts).unwrap();

    assert_eq!(crew.len(), 2);
    assert_eq!(crew[0].role, "Commander");
    assert_eq!(crew[0].astronaut, &astronauts["armstrong"]);
    assert_eq!(crew[1].role, "Lunar Module Pilot");
    assert_eq!(crew[1].astronaut, &astronauts["aldrin"]);
}

#[test]
fn output_matches_input_length_and_roles_for_larger_rosters() {
    let astronauts = astronaut_map(&[
        ("lovell", "James A. Lovell Jr."),
        ("swigert", "John L. Swigert Jr."),
        ("haise", "Fred W. Haise Jr."),
    ]);
    let mut mission = Mission::new(13, "Aborted landing.");
    mission.crew = vec![
        CrewRole::new("haise", "Lunar Module Pilot"),
        CrewRole::new("lovell", "Commander"),
        CrewRole::new("swigert", "Command Module Pilot"),
    ];

    let crew = resolve_crew(&mission, &astronauts).unwrap();

    assert_eq!(crew.len(), mission.crew.len());
    for (member, reference) in crew.iter().zip(&mission.crew) {
        assert_eq!(member.role, reference.role);
        assert_eq!(member.astronaut.id, reference.name);
    }
}

#[test]
fn missing_astronaut_is_a_data_integrity_fault() {
    let astronauts = astronaut_map(&[("armstrong", "Neil Armstrong")]);
    let mission = apollo_11();

    let fault = resolve_crew(&mission, &astronauts).unwrap_err();

    assert_eq!(
        fault,
        DataIntegrityFault {
            mission_id: 11,
            astronaut_id: "aldrin".to_string(),
        }
    );
    assert!(fault.to_string().contains("mission 11"));
    assert!(fault.to_string().contains("`aldrin`"));
}

#[test]
fn resolution_is_idempotent_and_leaves_inputs_untouched() {
    let astronauts = astronaut_map(&[("aldrin", "Buzz Aldrin"), ("armstrong", "Neil Armstrong")]);
    let mission = apollo_11();
    let mission_before = mission.clone();
    let astronauts_before = astronauts.clone();

    let first = resolve_crew(&mission, &astronauts).unwrap();
    let second = resolve_crew(&mission, &astronauts).unwrap();

    assert_eq!(first, second);
    assert_eq!(mission, mission_before);
    assert_eq!(astronauts, astronauts_before);
}

#[test]
fn end_to_end_from_json_documents() {
    let dataset = Dataset::from_json_strs(
        r#"{
            "armstrong": {"id": "armstrong", "name": "Neil Armstrong", "description": "Commander."},
            "aldrin": {"id": "aldrin", "name": "Buzz Aldrin", "description": "Lunar Module Pilot."}
        }"#,
        r#"[{
            "id": 11,
            "crew": [
                {"name": "armstrong", "role": "Commander"},
                {"name": "aldrin", "role": "Lunar Module Pilot"}
            ],
            "launchDate": "1969-07-16",
            "description": "Eagle has landed."
        }]"#,
    )
    .unwrap();
    let service = MissionService::new(&dataset);

    let detail = service.mission_detail(11).unwrap();
    let summary: Vec<(&str, &str)> = detail
        .crew
        .iter()
        .map(|member| (member.role, member.astronaut.name.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Commander", "Neil Armstrong"),
            ("Lunar Module Pilot", "Buzz Aldrin"),
        ]
    );
    assert_eq!(service.validate_integrity().unwrap(), 2);
}

#[test]
fn validate_integrity_stops_at_first_faulty_mission() {
    let dataset = Dataset::from_json_strs(
        r#"{"borman": {"id": "borman", "name": "Frank Borman", "description": "Apollo 8."}}"#,
        r#"[
            {"id": 8, "launchDate": "1968-12-21", "crew": [{"name": "borman", "role": "Commander"}], "description": "Lunar orbit."},
            {"id": 9, "crew": [{"name": "mcdivitt", "role": "Commander"}], "description": "LM test."},
            {"id": 10, "crew": [{"name": "stafford", "role": "Commander"}], "description": "Dress rehearsal."}
        ]"#,
    )
    .unwrap();
    let service = MissionService::new(&dataset);

    let fault = service.validate_integrity().unwrap_err();
    assert_eq!(fault.mission_id, 9);
    assert_eq!(fault.astronaut_id, "mcdivitt");

    let detail_error = service.mission_detail(10).unwrap_err();
    assert!(detail_error.to_string().contains("`stafford`"));
    assert!(service.mission_detail(8).is_ok());
}
