use super::*;

const RULE: &str =
    "-- ============================================================================";

fn default_header() -> String {
    render_header(&HeaderContext::from_config(&Config::default())).unwrap()
}

#[test]
fn test_header_starts_with_title_block() {
    let header = default_header();
    let expected_start = format!(
        "{RULE}\n-- SUPABASE DATABASE RESET SCRIPT\n-- WARNING: This will DELETE ALL DATA in the public schema\n{RULE}\n\n-- Step 1:"
    );
    assert!(header.starts_with(&expected_start), "{header}");
}

#[test]
fn test_header_ends_with_migrations_banner() {
    let header = default_header();
    let expected_end = format!("{RULE}\n-- MIGRATIONS START HERE\n{RULE}\n\n");
    assert!(header.ends_with(&expected_end), "{header}");
}

#[test]
fn test_header_drops_tables_routines_and_enum_types() {
    let header = default_header();
    assert!(header.contains("DO $$\nDECLARE\n    r RECORD;\nBEGIN\n"));
    assert!(header.contains("FROM pg_tables WHERE schemaname = 'public'"));
    assert!(header.contains("'DROP TABLE IF EXISTS public.' || quote_ident(r.tablename) || ' CASCADE'"));
    assert!(header.contains("FROM information_schema.routines WHERE routine_schema = 'public'"));
    assert!(header.contains("'DROP FUNCTION IF EXISTS public.' || quote_ident(r.routine_name) || ' CASCADE'"));
    assert!(header.contains("typnamespace = 'public'::regnamespace AND typtype = 'e'"));
    assert!(header.contains("'DROP TYPE IF EXISTS public.' || quote_ident(r.typname) || ' CASCADE'"));
    assert!(header.contains("END $$;\n"));
}

#[test]
fn test_header_enables_default_extensions() {
    let header = default_header();
    assert!(header.contains(
        "-- Step 2: Enable required PostgreSQL extensions\nCREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";\nCREATE EXTENSION IF NOT EXISTS \"pgcrypto\";\n\n"
    ));
}

#[test]
fn test_header_without_extensions_omits_section() {
    let ctx = HeaderContext {
        extensions: vec![],
        ..HeaderContext::from_config(&Config::default())
    };
    let header = render_header(&ctx).unwrap();
    assert!(!header.contains("CREATE EXTENSION"));
    assert!(!header.contains("Step 2"));
    assert!(header.contains(&format!("END $$;\n\n{RULE}\n-- MIGRATIONS START HERE")));
}

#[test]
fn test_header_uses_configured_schema() {
    let mut config = Config::default();
    config.schema = "tenant_a".to_string();
    let header = render_header(&HeaderContext::from_config(&config)).unwrap();
    assert!(header.contains("schemaname = 'tenant_a'"));
    assert!(header.contains("DROP TYPE IF EXISTS tenant_a."));
    assert!(!header.contains("public"));
}

#[test]
fn test_header_labels_and_date() {
    let mut config = Config::default();
    config.project = Some("Acrely".to_string());
    config.target = Some("example.supabase.co".to_string());
    let ctx = HeaderContext::from_config(&config).with_date("2025-11-12");
    let header = render_header(&ctx).unwrap();
    let expected = format!(
        "public schema\n{RULE}\n-- Project: Acrely\n-- Target: example.supabase.co\n-- Date: 2025-11-12\n{RULE}\n\n-- Step 1:"
    );
    assert!(header.contains(&expected), "{header}");
}

#[test]
fn test_header_single_label() {
    let mut config = Config::default();
    config.target = Some("local".to_string());
    let header = render_header(&HeaderContext::from_config(&config)).unwrap();
    assert!(header.contains(&format!("schema\n{RULE}\n-- Target: local\n{RULE}\n\n")));
    assert!(!header.contains("-- Project:"));
    assert!(!header.contains("-- Date:"));
}

#[test]
fn test_header_is_deterministic() {
    assert_eq!(default_header(), default_header());
}
