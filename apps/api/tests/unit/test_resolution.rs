use society_api::domain::{
    address::{AddressParser, NOT_SERVICEABLE, ParsedAddress},
    resolution::{AddressResolver, extract_block, extract_flat, haversine_km},
    society::{Society, SocietyRegistry},
};
use std::sync::Arc;

fn resolver() -> AddressResolver {
    AddressResolver::new(SocietyRegistry::builtin())
}

fn builtin(name: &str) -> Society {
    SocietyRegistry::builtin()
        .find_by_name(name)
        .expect("built-in society")
        .clone()
}

#[test]
fn every_society_resolves_by_its_own_name_at_its_own_gate() {
    let resolver = resolver();
    for society in resolver.registry().iter() {
        let parsed = resolver.resolve(society.latitude, society.longitude, &society.name);
        assert_eq!(parsed.society_name, society.name);
        assert!(
            parsed.proximity_note.starts_with("Location is within 5 km range of"),
            "unexpected note for {}: {}",
            society.name,
            parsed.proximity_note
        );
        assert!(!parsed.proximity_note.contains("auto-corrected"));
    }
}

#[test]
fn full_address_in_range_resolves_all_components() {
    let parsed = resolver().resolve(12.87, 77.661, "Flat 102 Magnifica Sobha Silicon Oasis");
    assert_eq!(parsed.society_name, "Sobha Silicon Oasis");
    assert_eq!(parsed.block.as_deref(), Some("Magnifica"));
    assert_eq!(parsed.flat.as_deref(), Some("102"));
    assert!(parsed.proximity_note.contains("within 5 km range of Sobha Silicon Oasis"));
}

#[test]
fn far_away_points_keep_the_name_but_drop_components() {
    let parsed = resolver().resolve(13.5, 78.0, "Sobha Silicon Oasis block Vivo");
    assert_eq!(parsed.society_name, "Sobha Silicon Oasis");
    assert!(parsed.block.is_none());
    assert!(parsed.flat.is_none());
    assert!(
        parsed
            .proximity_note
            .starts_with("Location is beyond 5 km range of registered society coordinates")
    );
}

#[test]
fn unrelated_text_is_not_serviceable() {
    let parsed = resolver().resolve(12.9, 77.6, "12 Main Road Koramangala");
    assert_eq!(parsed, ParsedAddress::not_serviceable());
    assert_eq!(parsed.society_name, NOT_SERVICEABLE);
}

#[test]
fn block_extraction_ignores_case() {
    let fern = builtin("Prestige Fern Residency");
    assert_eq!(extract_block(&fern, "BLOCK 1"), extract_block(&fern, "block 1"));
    assert_eq!(extract_block(&fern, "block 1"), Some("1"));
}

#[test]
fn bare_three_digit_flats_need_no_prefix() {
    let oasis = builtin("Sobha Silicon Oasis");
    assert_eq!(extract_flat(&oasis, "vivo 203"), Some("203"));
}

#[test]
fn components_are_always_registered_identifiers() {
    let resolver = resolver();
    let inputs = [
        "Prestige Fern Residency, block 2, flat 202",
        "fern residency t-1 #101",
        "sunrise park (b) 203",
        "Sobha Silicon Oasis magnifca 1030",
        "sobha vivo room 999",
    ];

    for input in inputs {
        let parsed = resolver.resolve(12.87, 77.661, input);
        let Some(society) = resolver.registry().find_by_name(&parsed.society_name) else {
            continue;
        };
        if let Some(block) = &parsed.block {
            assert!(society.blocks.contains(block), "{input}: invented block {block}");
        }
        if let Some(flat) = &parsed.flat {
            assert!(
                society.flats_in_each_block.contains(flat),
                "{input}: invented flat {flat}"
            );
        }
    }
}

#[test]
fn injected_registry_replaces_builtin_societies() {
    let registry = SocietyRegistry::new(vec![Society {
        name: "Green Acres".to_string(),
        latitude: 12.95,
        longitude: 77.7,
        blocks: vec!["North".to_string(), "South".to_string()],
        flats_in_each_block: vec!["11".to_string(), "12".to_string()],
    }])
    .expect("valid registry");
    let resolver = AddressResolver::new(registry);

    let parsed = resolver.resolve(12.951, 77.701, "green acres south block, flat 12");
    assert_eq!(parsed.society_name, "Green Acres");
    assert_eq!(parsed.block.as_deref(), Some("South"));
    assert_eq!(parsed.flat.as_deref(), Some("12"));

    let unknown = resolver.resolve(12.87, 77.661, "Sobha Silicon Oasis");
    assert!(!unknown.is_matched());
}

#[test]
fn haversine_is_symmetric_and_zero_at_the_same_point() {
    let there = haversine_km(12.87, 77.661, 12.8683, 77.66);
    let back = haversine_km(12.8683, 77.66, 12.87, 77.661);
    assert!((there - back).abs() < 1e-12);
    assert_eq!(haversine_km(12.87, 77.661, 12.87, 77.661), 0.0);
    assert!(there < 1.0);
}

#[test]
fn resolver_is_shared_across_threads() {
    let resolver = Arc::new(resolver());
    let parser: Arc<dyn AddressParser> = resolver.clone();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = parser.clone();
                scope.spawn(move || parser.parse(12.8341, 77.6625, "Prestige Sunrise Park A 101"))
            })
            .collect();

        for handle in handles {
            let parsed = handle.join().expect("worker panicked");
            assert_eq!(parsed.society_name, "Prestige Sunrise Park");
            assert_eq!(parsed.flat.as_deref(), Some("101"));
        }
    });
}
