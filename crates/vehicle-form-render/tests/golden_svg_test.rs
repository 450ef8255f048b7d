use std::path::PathBuf;
use vehicle_form_core::{BodyKind, Seed, VehicleDescriptor};
use vehicle_form_render::{SvgRenderOptions, render_fallback, render_vehicle_svg};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn golden(name: &str) -> String {
    let path = workspace_root()
        .join("fixtures")
        .join("goldens")
        .join(format!("{name}.svg"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

fn render(descriptor: &VehicleDescriptor) -> String {
    let out = render_vehicle_svg(descriptor, &SvgRenderOptions::default());
    assert!(!out.fallback, "unexpected fallback for {descriptor:?}");
    out.svg
}

fn assert_golden(name: &str, actual: &str) {
    let expected = golden(name);
    if actual != expected {
        let line = actual
            .lines()
            .zip(expected.lines())
            .position(|(a, e)| a != e)
            .map(|i| i + 1);
        panic!("{name}: output differs from golden (first differing line: {line:?})");
    }
}

#[test]
fn camry_sedan_matches_golden() {
    let d = VehicleDescriptor::new("Toyota", "Camry", "2022", "Sedan", "Car");
    assert_golden("camry_sedan", &render(&d));
}

#[test]
fn f150_truck_matches_golden() {
    let d = VehicleDescriptor::new("Ford", "F-150", "2020", "Pickup", "Truck");
    assert_golden("f150_truck", &render(&d));
}

#[test]
fn crv_suv_matches_golden() {
    let d = VehicleDescriptor::new(
        "Honda",
        "CR-V",
        "2019",
        "Sport Utility Vehicle (SUV)/Multi-Purpose Vehicle (MPV)",
        "Multipurpose Passenger Vehicle (MPV)",
    );
    assert_golden("crv_suv", &render(&d));
}

#[test]
fn civic_hatch_matches_golden() {
    let d = VehicleDescriptor::new(
        "Honda",
        "Civic",
        "2018",
        "Hatchback/Liftback/Notchback",
        "Passenger Car",
    );
    assert_golden("civic_hatch", &render(&d));
}

#[test]
fn bmw_coupe_matches_golden() {
    let d = VehicleDescriptor::new("BMW", "4 Series", "2021", "Coupe", "Passenger Car");
    assert_golden("bmw_coupe", &render(&d));
}

#[test]
fn empty_descriptor_matches_golden() {
    assert_golden("empty", &render(&VehicleDescriptor::default()));
}

#[test]
fn escaped_label_matches_golden() {
    let d = VehicleDescriptor::new("Fiat & <Sons>", "\"500\" l'Abarth", " 2017 ", "", "");
    let svg = render(&d);
    assert!(svg.contains("Fiat &amp; &lt;Sons&gt; &quot;500&quot; l&#039;Abarth"));
    assert_golden("escaped_label", &svg);
}

#[test]
fn fallback_matches_golden() {
    let out = render_fallback();
    assert_eq!(out.identity.seed, Seed::fallback());
    assert_golden("fallback", &out.svg);
}

#[test]
fn query_string_descriptor_renders_the_same_document() {
    let d = VehicleDescriptor::from_query(
        "make=Toyota&model=Camry&year=2022&bodyClass=Sedan&vehicleType=Car",
    );
    assert_golden("camry_sedan", &render(&d));
}

#[test]
fn goldens_are_well_formed_svg() {
    for name in [
        "camry_sedan",
        "f150_truck",
        "crv_suv",
        "civic_hatch",
        "bmw_coupe",
        "empty",
        "escaped_label",
        "fallback",
    ] {
        let text = golden(name);
        let doc = roxmltree::Document::parse(&text)
            .unwrap_or_else(|e| panic!("{name}: not well-formed: {e}"));
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.attribute("viewBox"), Some("0 0 980 520"));
        assert_eq!(root.attribute("role"), Some("img"));
    }
}

#[test]
fn rendered_label_round_trips_through_xml() {
    let d = VehicleDescriptor::new("Fiat & <Sons>", "\"500\" l'Abarth", "2017", "", "");
    let svg = render(&d);
    let doc = roxmltree::Document::parse(&svg).expect("well-formed");
    assert_eq!(
        doc.root_element().attribute("aria-label"),
        Some("2017 Fiat & <Sons> \"500\" l'Abarth")
    );
}

#[test]
fn distinct_identities_produce_distinct_documents() {
    let a = render(&VehicleDescriptor::new("Toyota", "Camry", "2022", "Sedan", "Car"));
    let b = render(&VehicleDescriptor::new("Toyota", "Camry", "2023", "Sedan", "Car"));
    assert_ne!(a, b);
}

#[test]
fn body_kind_drives_the_archetype() {
    let truck = render_vehicle_svg(
        &VehicleDescriptor::new("Ford", "F-150", "2020", "Pickup", "Truck"),
        &SvgRenderOptions::default(),
    );
    assert_eq!(truck.identity.kind, BodyKind::Truck);
    assert!(truck.svg.contains(r#"<circle cx="640" cy="360" r="38""#));
}
