mod common;

use common::{workbook, IP_HEADER};
use ipconf_core::input::Workbook;
use ipconf_core::model::{Role, UNSET};
use ipconf_core::project::{GeneratorConfig, IdOrder, RolePolicy};
use ipconf_core::services::pipeline::generate;
use ipconf_core::Warning;

fn membership() -> GeneratorConfig {
    GeneratorConfig::default()
}

#[test]
fn two_ip_bus_round_trip_under_membership() {
    let wb = workbook(
        &["[ipA, R, 32, 100, clkA]", "[ipB, W, 64, 200, clkB]"],
        &["[busX, 128, 400, AXI, clkX, ipA, ipB]"],
    );
    let generation = generate(&wb, &membership()).expect("generate");
    assert!(generation.warnings.is_empty(), "unexpected warnings: {:?}", generation.warnings);

    let m1 = generation.model.by_id("M1").expect("M1");
    let s1 = generation.model.by_id("S1").expect("S1");
    assert_eq!(m1.original_name, "ipA");
    assert_eq!(s1.original_name, "ipB");
    for ip in [m1, s1] {
        assert_eq!(ip.final_bit_width, 128);
        assert_eq!(ip.final_frequency, 400);
        assert_eq!(ip.final_protocol, "AXI");
        assert_eq!(ip.final_clk_domain, "clkX");
        assert_eq!(ip.connected_interconnect, "busX");
    }
    assert_eq!(m1.original_bit_width, 32);
    assert_eq!(s1.read_write, "W");

    let lines: Vec<&str> = generation.report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("IP NAME"));
    assert_eq!(lines[1], "=".repeat(150));
    assert_eq!(
        lines[2],
        "M1             MASTER    R              128            400            AXI            clkX           busX           ipA            "
    );
    assert!(lines[3].starts_with("S1             SLAVE     W"));
}

#[test]
fn identical_input_renders_identical_bytes() {
    let ips = ["[c, R, 8, 1, k]", "[a, R, 8, 1, k]", "[b, W, 8, 1, k]", "[d, W, 8, 1, k]"];
    let ics = ["[bus1, 16, 2, AHB, k1, 'c, a', 'b, ghost']", "[bus2, 32, 4, AXI, k2, d, a]"];
    let first = generate(&workbook(&ips, &ics), &membership()).unwrap();
    let second = generate(&workbook(&ips, &ics), &membership()).unwrap();
    assert_eq!(first.report, second.report);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn canonical_ids_are_dense_per_role() {
    let names: Vec<String> = (1..=12).map(|i| format!("ip{i:02}")).collect();
    let ip_rows: Vec<String> = names.iter().map(|n| format!("[{n}, R, 32, 100, clk]")).collect();
    let masters = names[..7].join(", ");
    let slaves = names[7..].join(", ");
    let ic_row = format!("[bus, 64, 200, AXI, clk, '{masters}', '{slaves}']");
    let ip_refs: Vec<&str> = ip_rows.iter().map(String::as_str).collect();
    let generation = generate(&workbook(&ip_refs, &[&ic_row]), &membership()).unwrap();

    for (role, count) in [(Role::Master, 7), (Role::Slave, 5)] {
        let mut indices: Vec<usize> = generation
            .model
            .ips
            .iter()
            .filter(|ip| ip.role == role)
            .map(|ip| ip.canonical_id.index)
            .collect();
        indices.sort();
        assert_eq!(indices, (1..=count).collect::<Vec<_>>());
    }
}

#[test]
fn last_interconnect_in_table_order_wins() {
    let wb = workbook(
        &["[ipA, R, 32, 100, clkA]", "[ipB, W, 64, 200, clkB]"],
        &["[busA, 16, 50, APB, clkP, ipA, ipB]", "[busB, 256, 800, CHI, clkQ, ipA, '']"],
    );
    let generation = generate(&wb, &membership()).unwrap();
    let ip_a = generation.model.get("ipA").unwrap();
    assert_eq!(ip_a.final_bit_width, 256);
    assert_eq!(ip_a.final_frequency, 800);
    assert_eq!(ip_a.final_protocol, "CHI");
    assert_eq!(ip_a.final_clk_domain, "clkQ");
    assert_eq!(ip_a.connected_interconnect, "busB");

    let ip_b = generation.model.get("ipB").unwrap();
    assert_eq!(ip_b.connected_interconnect, "busA");
}

#[test]
fn unreferenced_ip_keeps_baseline_and_is_flagged() {
    let wb = workbook(
        &["[ipA, R, 32, 100, clkA]", "[idle, RW, 8, 25, clkI]"],
        &["[busX, 128, 400, AXI, clkX, ipA, '']"],
    );
    let generation = generate(&wb, &membership()).unwrap();
    let idle = generation.model.get("idle").unwrap();
    assert_eq!(idle.final_bit_width, 8);
    assert_eq!(idle.final_frequency, 25);
    assert_eq!(idle.final_clk_domain, "clkI");
    assert_eq!(idle.final_protocol, UNSET);
    assert_eq!(idle.connected_interconnect, UNSET);
    assert_eq!(
        generation.warnings,
        vec![Warning::Unattached { name: "idle".into(), resolved_as: Role::Slave }]
    );
}

#[test]
fn dangling_reference_warns_and_still_renders_everything_else() {
    let wb = workbook(
        &["[ipA, R, 32, 100, clkA]", "[ipB, W, 64, 200, clkB]"],
        &["[busX, 128, 400, AXI, clkX, 'ipA, phantom', ipB]"],
    );
    let generation = generate(&wb, &membership()).unwrap();
    assert_eq!(
        generation.warnings,
        vec![Warning::DanglingReference {
            interconnect: "busX".into(),
            name: "phantom".into(),
            listed_as: Role::Master,
        }]
    );
    assert_eq!(generation.model.ips.len(), 2);
    assert_eq!(generation.model.get("ipB").unwrap().connected_interconnect, "busX");
    assert!(!generation.report.contains("phantom"));
}

#[test]
fn role_conflict_is_reported_and_resolved_as_master() {
    let wb = workbook(
        &["[ipA, R, 32, 100, clkA]", "[ipB, W, 64, 200, clkB]"],
        &["[bus1, 16, 1, APB, k, ipA, ipB]", "[bus2, 16, 1, APB, k, ipB, ipA]"],
    );
    let generation = generate(&wb, &membership()).unwrap();
    assert!(generation
        .warnings
        .contains(&Warning::RoleConflict { name: "ipA".into(), resolved_as: Role::Master }));
    assert_eq!(generation.model.count(Role::Master), 2);
    assert_eq!(generation.model.count(Role::Slave), 0);
}

#[test]
fn empty_interconnect_sheet_keeps_every_ip_at_baseline() {
    let wb = workbook(&["[ipA, R, 32, 100, clkA]", "[ipB, W, 64, 200, clkB]"], &[]);
    let generation = generate(&wb, &membership()).unwrap();
    assert_eq!(generation.model.ips.len(), 2);
    for ip in &generation.model.ips {
        assert_eq!(ip.final_bit_width, ip.original_bit_width);
        assert_eq!(ip.connected_interconnect, UNSET);
    }
    assert_eq!(generation.report.lines().count(), 4);
}

#[test]
fn missing_interconnect_sheet_is_not_an_error() {
    let body = format!("sheets:\n  - rows:\n      - {IP_HEADER}\n      - [ipA, R, 32, 100, clkA]\n");
    let wb = Workbook::from_yaml_str(&body).unwrap();
    let generation = generate(&wb, &membership()).unwrap();
    assert_eq!(generation.model.ips.len(), 1);
    assert!(generation.model.interconnects.is_empty());
    assert_eq!(generation.model.get("ipA").unwrap().connected_interconnect, UNSET);
}

#[test]
fn row_flag_policy_uses_flag_column_and_row_order() {
    let body = "sheets:\n  - rows:\n      - [ip name, read/write, bit width, frequency, clk domain, master]\n      - [zeta, R, 32, 100, clkA, yes]\n      - [alpha, W, 64, 200, clkB, no]\n      - [beta, R, 16, 50, clkC, true]\n  - rows:\n      - [interconnect name, bit width, frequency, protocol, clk domain, set of masters, set of slaves]\n      - [busX, 128, 400, AXI, clkX, alpha, zeta]\n";
    let wb = Workbook::from_yaml_str(body).unwrap();
    let config = GeneratorConfig::default().with_policy(Some(RolePolicy::RowFlag));
    let generation = generate(&wb, &config).unwrap();

    let id = |name: &str| generation.model.canonical_for(name).unwrap().to_string();
    assert_eq!(id("zeta"), "M1");
    assert_eq!(id("beta"), "M2");
    assert_eq!(id("alpha"), "S1");
    // Role stays with the flag even though busX lists alpha as a master.
    assert_eq!(generation.model.get("alpha").unwrap().role, Role::Slave);
    assert_eq!(generation.model.get("alpha").unwrap().connected_interconnect, "busX");
    assert!(generation.warnings.is_empty());
}

#[test]
fn row_flag_policy_deduplicates_repeated_names() {
    let body = "sheets:\n  - rows:\n      - [ip name, read/write, bit width, frequency, clk domain, master]\n      - [ipA, R, 32, 100, clkA, yes]\n      - [ipB, W, 64, 200, clkB, yes]\n      - [ipC, R, 16, 50, clkC, no]\n      - [ipA, RW, 8, 25, clkD, no]\n      - [ipD, W, 8, 25, clkE, yes]\n";
    let wb = Workbook::from_yaml_str(body).unwrap();
    let config = GeneratorConfig::default().with_policy(Some(RolePolicy::RowFlag));
    let generation = generate(&wb, &config).unwrap();

    let model = &generation.model;
    assert_eq!(model.ips.len(), 4);
    assert_eq!(model.count(Role::Master), 2);
    assert_eq!(model.count(Role::Slave), 2);

    let id = |name: &str| model.canonical_for(name).unwrap().to_string();
    // ipA keeps its first position but takes the last row's flag and values.
    assert_eq!(id("ipA"), "S1");
    assert_eq!(id("ipC"), "S2");
    assert_eq!(id("ipB"), "M1");
    assert_eq!(id("ipD"), "M2");
    let ip_a = model.get("ipA").unwrap();
    assert_eq!(ip_a.read_write, "RW");
    assert_eq!(ip_a.final_bit_width, 8);
    assert_eq!(ip_a.final_clk_domain, "clkD");
}

#[test]
fn row_flag_policy_accepts_empty_ip_sheet() {
    let wb = Workbook::from_yaml_str("sheets:\n  - rows: []\n").unwrap();
    let config = GeneratorConfig::default().with_policy(Some(RolePolicy::RowFlag));
    let generation = generate(&wb, &config).unwrap();
    assert!(generation.model.ips.is_empty());
    assert_eq!(generation.report.lines().count(), 2);
}

#[test]
fn report_order_follows_configured_id_order() {
    let ip_rows: Vec<String> = (1..=10).map(|i| format!("[ip{i:02}, R, 8, 1, k]")).collect();
    let ip_refs: Vec<&str> = ip_rows.iter().map(String::as_str).collect();
    let masters = (1..=10).map(|i| format!("ip{i:02}")).collect::<Vec<_>>().join(", ");
    let ic_row = format!("[bus, 8, 1, AXI, k, '{masters}', '']");
    let wb = workbook(&ip_refs, &[&ic_row]);

    let first_ids = |order: IdOrder| {
        let generation = generate(&wb, &membership().with_order(Some(order))).unwrap();
        generation
            .report
            .lines()
            .skip(2)
            .map(|l| l.split_whitespace().next().unwrap().to_string())
            .collect::<Vec<_>>()
    };
    let numeric = first_ids(IdOrder::Numeric);
    assert_eq!(&numeric[8..], ["M9", "M10"]);
    let lexicographic = first_ids(IdOrder::Lexicographic);
    assert_eq!(&lexicographic[..3], ["M1", "M10", "M2"]);
}
