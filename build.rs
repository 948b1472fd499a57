use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/diseases.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    // Validate structure
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let symptom_count = validate_symptoms(catalog);

    let diseases = catalog.get("diseases").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'diseases' field\n\
             The catalog must have a top-level 'diseases' array.\n"
        );
    });

    let diseases = diseases.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'diseases' must be an array\n\
             Got: {diseases}\n"
        );
    });

    let with_profile = validate_diseases(diseases, symptom_count);

    println!(
        "cargo:warning=Validated catalog: {} diseases ({with_profile} with profiles), {symptom_count} tracked symptoms",
        diseases.len()
    );
}

fn validate_symptoms(catalog: &serde_json::Value) -> usize {
    let symptoms = catalog.get("symptoms").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'symptoms' field\n\
             The catalog must list the tracked symptoms profile positions refer to.\n"
        );
    });

    let symptoms = symptoms.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'symptoms' must be an array\n\
             Got: {symptoms}\n"
        );
    });

    assert!(
        !symptoms.is_empty(),
        "\n\nCATALOG BUILD ERROR: 'symptoms' must not be empty\n"
    );

    for (i, symptom) in symptoms.iter().enumerate() {
        assert!(
            symptom.is_string(),
            "\n\nCATALOG BUILD ERROR: Symptom at index {i} must be a string\n\
             Got: {symptom}\n"
        );
    }

    symptoms.len()
}

fn validate_diseases(diseases: &[serde_json::Value], symptom_count: usize) -> usize {
    let mut seen_names = std::collections::HashSet::new();
    let mut with_profile = 0;

    for (i, disease) in diseases.iter().enumerate() {
        let name = disease
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Disease at index {i} missing 'name' string field\n"
                );
            });

        assert!(
            seen_names.insert(name),
            "\n\nCATALOG BUILD ERROR: Duplicate disease name '{name}' (index {i})\n\
             Disease names must be unique within the catalog.\n"
        );

        if let Some(profile) = disease.get("profile") {
            validate_profile(profile, name, symptom_count);
            with_profile += 1;
        }
    }

    with_profile
}

fn validate_profile(profile: &serde_json::Value, name: &str, symptom_count: usize) {
    let entries = profile.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Disease '{name}' profile must be an array\n\
             Got: {profile}\n"
        );
    });

    assert!(
        entries.len() == symptom_count,
        "\n\nCATALOG BUILD ERROR: Disease '{name}' profile has {} entries, expected {symptom_count}\n\
         Each profile needs one severity per tracked symptom.\n",
        entries.len()
    );

    for (j, severity) in entries.iter().enumerate() {
        assert!(
            severity.is_string(),
            "\n\nCATALOG BUILD ERROR: Disease '{name}' profile entry {j} must be a string\n\
             Got: {severity}\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/diseases.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
