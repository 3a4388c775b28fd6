use glass_kiln_toolbox::material_db::{self, GlassFamily};
use glass_kiln_toolbox::schedule::ProcessMode;

#[test]
fn lookup_accepts_code_or_name_in_any_case() {
    assert_eq!(
        material_db::find_material("be90").map(|m| m.family),
        Some(GlassFamily::Bullseye90)
    );
    assert_eq!(
        material_db::find_material(" Oceanside COE 96 ").map(|m| m.family),
        Some(GlassFamily::Oceanside96)
    );
    assert!(material_db::find_material("pyrex-ish").is_none());
}

#[test]
fn every_family_has_an_entry() {
    for family in [
        GlassFamily::Bullseye90,
        GlassFamily::Oceanside96,
        GlassFamily::Uroboros90,
        GlassFamily::Float,
        GlassFamily::Borosilicate,
        GlassFamily::Custom,
    ] {
        assert_eq!(material_db::material(family).family, family);
    }
}

#[test]
fn only_custom_lacks_anneal_and_strain() {
    for m in material_db::materials() {
        let missing = m.anneal_f.is_none() || m.strain_f.is_none();
        assert_eq!(missing, m.family == GlassFamily::Custom, "{}", m.code);
        if let (Some(a), Some(s)) = (m.anneal_f, m.strain_f) {
            assert!(s < a, "{}: strain {s} >= anneal {a}", m.code);
        }
        assert!(m.cooling_multiplier > 0.0);
        assert!(m.targets.for_mode(ProcessMode::AnnealOnly).is_none());
    }
}
