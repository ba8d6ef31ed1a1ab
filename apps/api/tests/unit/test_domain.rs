use society_api::domain::{
    address::{NOT_SERVICEABLE, ParsedAddress},
    society::{RegistryError, Society, SocietyRegistry},
};
use society_api::infrastructure::registry::registry_from_json;

fn society(name: &str) -> Society {
    Society {
        name: name.to_string(),
        latitude: 12.9,
        longitude: 77.6,
        blocks: vec!["A".to_string()],
        flats_in_each_block: vec!["101".to_string()],
    }
}

#[test]
fn builtin_registry_is_valid_and_non_empty() {
    let builtin = SocietyRegistry::builtin();
    assert!(!builtin.is_empty());

    let revalidated = SocietyRegistry::new(builtin.societies().to_vec());
    assert!(revalidated.is_ok(), "built-in societies should pass validation");
}

#[test]
fn registry_rejects_empty_and_duplicate_entries() {
    assert!(matches!(SocietyRegistry::new(vec![]), Err(RegistryError::Empty)));

    let duplicate = SocietyRegistry::new(vec![society("Green Acres"), society("green acres")]);
    assert!(matches!(duplicate, Err(RegistryError::DuplicateName(_))));
}

#[test]
fn registry_rejects_out_of_range_coordinates() {
    let mut broken = society("Green Acres");
    broken.latitude = 91.0;
    assert!(matches!(
        SocietyRegistry::new(vec![broken]),
        Err(RegistryError::InvalidSociety { .. })
    ));
}

#[test]
fn registry_file_uses_camel_case_keys() {
    let registry = registry_from_json(
        r#"[{
            "name": "Green Acres",
            "latitude": 12.95,
            "longitude": 77.7,
            "blocks": ["North", "South"],
            "flatsInEachBlock": ["11", "12"]
        }]"#,
    )
    .expect("valid registry json");

    let acres = registry.find_by_name("  GREEN ACRES ").expect("lookup ignores case");
    assert_eq!(acres.blocks, vec!["North", "South"]);
    assert_eq!(acres.find_flat("12"), Some("12"));
}

#[test]
fn registry_file_with_unknown_shape_fails_to_parse() {
    assert!(matches!(
        registry_from_json(r#"{"name": "not an array"}"#),
        Err(RegistryError::Parse(_))
    ));
}

#[test]
fn not_serviceable_sentinel_is_stable() {
    let parsed = ParsedAddress::not_serviceable();
    assert_eq!(parsed.society_name, NOT_SERVICEABLE);
    assert_eq!(parsed.proximity_note, "No matching society found");
    assert!(parsed.block.is_none());
    assert!(parsed.flat.is_none());
}
