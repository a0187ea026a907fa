//! End-to-end import/export tests over real files.

use std::collections::BTreeSet;
use std::fs;

use dealbook::{
    Cadence, Contact, ExportOutcome, ExportProfile, ExportService, ImportService, InMemoryStore,
    Role, Severity, Tag,
};

fn import_str(dir: &tempfile::TempDir, name: &str, content: &str) -> dealbook::ImportOutcome {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    ImportService::new()
        .import_path(&path, &InMemoryStore::new())
        .unwrap()
}

#[test]
fn messy_real_world_file_imports() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = import_str(
        &dir,
        "messy.csv",
        "\u{feff}Acme CRM export\n\
         ,,,\n\
         Name,Email,Address,Phone,Role,Tags,Cadence,Vendor Id\n\
         Ada Lovelace,ada@example.com,\"12 Analytical Way, Unit 3\",5551234,Investor,\"VIP, Key Client\",every 30 days,AX-1\n\
         Bob Roberts,bob@example.com,9 Side St,5559876,2,,,AX-2\n\
         ,missing@name.com,Nowhere,5550000,Lead,,,AX-3\n\
         \n\
         Cleo Khan,cleo@example.com,\"She said \"\"call me\"\"\",5552468,lead,hot_lead,14,AX-4\n",
    );

    assert_eq!(outcome.summary.imported, 3);
    assert_eq!(outcome.summary.malformed, 1);
    assert_eq!(outcome.summary.duplicates, 0);

    let ada = &outcome.contacts[0];
    assert_eq!(ada.address, "12 Analytical Way, Unit 3");
    let tags: Vec<String> = ada.tags.iter().map(Tag::normalized).collect();
    assert_eq!(tags, vec!["key_client", "vip"]);
    assert_eq!(ada.cadence.unwrap().days(), 30);

    // Numeric role shortcut on Bob's row.
    assert_eq!(outcome.contacts[1].role, Role::Partner);

    // Embedded doubled quotes survive.
    assert_eq!(outcome.contacts[2].address, "She said \"call me\"");
    assert_eq!(outcome.contacts[2].role, Role::Lead);

    // The malformed row is reported exactly once, on its physical line.
    let errors: Vec<_> = outcome
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 6);
}

#[test]
fn tab_delimited_file_imports() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = import_str(
        &dir,
        "tabs.csv",
        "Name\tPhone\tEmail\tAddress\tRole\n\
         Ada Lovelace\t5551234\tada@example.com\t12 Analytical Way\tInvestor\n",
    );
    assert_eq!(outcome.summary.imported, 1);
    assert_eq!(outcome.contacts[0].name, "Ada Lovelace");
}

#[test]
fn export_then_reimport_reproduces_contacts() {
    let mut tags = BTreeSet::new();
    tags.insert(Tag::new("vip").unwrap());
    let contacts = vec![
        Contact {
            name: "Ada Lovelace".to_string(),
            phone: "5551234".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Way, Unit 3".to_string(),
            role: Role::Investor,
            tags,
            cadence: Some(Cadence::new(30).unwrap()),
            interactions: Vec::new(),
        },
        Contact {
            name: "Bob Roberts".to_string(),
            phone: "5559876".to_string(),
            email: "bob@example.com".to_string(),
            address: "Quote \"here\" and, commas".to_string(),
            role: Role::Lead,
            tags: BTreeSet::new(),
            cadence: None,
            interactions: Vec::new(),
        },
    ];

    let dir = tempfile::tempdir().unwrap();
    let outcome = ExportService::new()
        .with_out_dir(dir.path())
        .export_records(&contacts, ExportProfile::Full, Some("roundtrip"))
        .unwrap();
    let path = match outcome {
        ExportOutcome::Written { path, count } => {
            assert_eq!(count, 2);
            path
        }
        ExportOutcome::NothingToExport => panic!("expected a write"),
    };

    let reimported = ImportService::new()
        .import_path(&path, &InMemoryStore::new())
        .unwrap();
    assert_eq!(reimported.summary.imported, 2);
    assert_eq!(reimported.summary.malformed, 0);
    assert_eq!(reimported.contacts, contacts);
}

#[test]
fn export_twice_never_overwrites() {
    let contacts = vec![Contact {
        name: "Ada Lovelace".to_string(),
        phone: "5551234".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Way".to_string(),
        role: Role::Investor,
        tags: BTreeSet::new(),
        cadence: None,
        interactions: Vec::new(),
    }];

    let dir = tempfile::tempdir().unwrap();
    let service = ExportService::new().with_out_dir(dir.path());

    let first = service
        .export_records(&contacts, ExportProfile::Standard, Some("x"))
        .unwrap();
    let first_path = match first {
        ExportOutcome::Written { path, .. } => path,
        ExportOutcome::NothingToExport => panic!("expected a write"),
    };
    let original = fs::read_to_string(&first_path).unwrap();

    let second = service
        .export_records(&contacts, ExportProfile::Standard, Some("x"))
        .unwrap();
    match second {
        ExportOutcome::Written { path, .. } => {
            assert_eq!(path, dir.path().join("x_1.csv"));
        }
        ExportOutcome::NothingToExport => panic!("expected a write"),
    }

    assert_eq!(fs::read_to_string(&first_path).unwrap(), original);
}

#[test]
fn duplicate_against_existing_store() {
    let existing = Contact {
        name: "Ada Lovelace".to_string(),
        phone: "5551234".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Way".to_string(),
        role: Role::Investor,
        tags: BTreeSet::new(),
        cadence: None,
        interactions: Vec::new(),
    };
    let store = InMemoryStore::with_contacts(vec![existing]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.csv");
    fs::write(
        &path,
        "Name,Phone,Email,Address,Role\n\
         Ada Lovelace,5551234,ada@example.com,12 Analytical Way,Investor\n\
         Grace Hopper,5550001,grace@example.com,1 Navy Yard,Partner\n",
    )
    .unwrap();

    let outcome = ImportService::new().import_path(&path, &store).unwrap();
    assert_eq!(outcome.summary.duplicates, 1);
    assert_eq!(outcome.summary.imported, 1);
    assert_eq!(outcome.contacts[0].name, "Grace Hopper");
}
