use ladderview_core::semantic::ElementKind;
use ladderview_parser::{
    build,
    error::{ErrorCode, Severity},
    try_build,
};

const PARALLEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://www.plcopen.org/xml/tc6_0201">
  <types>
    <pous>
      <pou name="Lamp" pouType="program">
        <body>
          <LD>
            <leftPowerRail localId="1">
              <connectionPointOut formalParameter=""/>
            </leftPowerRail>
            <contact localId="2">
              <connectionPointIn><connection refLocalId="1"/></connectionPointIn>
              <variable>A</variable>
            </contact>
            <contact localId="3">
              <connectionPointIn><connection refLocalId="1"/></connectionPointIn>
              <variable>B</variable>
            </contact>
            <coil localId="4">
              <connectionPointIn>
                <connection refLocalId="2"/>
                <connection refLocalId="3"/>
              </connectionPointIn>
              <variable>Lamp</variable>
            </coil>
            <rightPowerRail localId="5">
              <connectionPointIn><connection refLocalId="4"/></connectionPointIn>
            </rightPowerRail>
          </LD>
        </body>
      </pou>
    </pous>
  </types>
</project>"#;

#[test]
fn test_parallel_coil_inputs() {
    let elements = build(PARALLEL);

    assert_eq!(elements.len(), 5);

    let coil = &elements["4"];
    assert_eq!(coil.kind(), ElementKind::Coil);
    assert_eq!(coil.variable(), "Lamp");
    assert_eq!(
        coil.inputs().iter().map(|id| id.as_str()).collect::<Vec<_>>(),
        ["2", "3"]
    );

    let right_rail = &elements["5"];
    assert_eq!(right_rail.kind(), ElementKind::Other);
    assert_eq!(right_rail.tag(), "rightPowerRail");
}

#[test]
fn test_document_order_preserved() {
    let elements = build(PARALLEL);

    let order: Vec<_> = elements.keys().map(|id| id.as_str()).collect();
    assert_eq!(order, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_only_first_ladder_body_is_read() {
    let source = r#"<project>
        <pou><body><LD><coil localId="1"><variable>First</variable></coil></LD></body></pou>
        <pou><body><LD><coil localId="2"><variable>Second</variable></coil></LD></body></pou>
    </project>"#;

    let elements = build(source);

    assert_eq!(elements.len(), 1);
    assert_eq!(elements["1"].variable(), "First");
}

#[test]
fn test_nested_elements_are_not_ladder_elements() {
    let source = r#"<LD>
        <contact localId="2">
            <addData><data><contact localId="99"/></data></addData>
            <variable>Outer</variable>
        </contact>
    </LD>"#;

    let elements = build(source);

    assert_eq!(elements.len(), 1);
    assert!(elements.get("99").is_none());
}

#[test]
fn test_first_variable_wins() {
    let source = r#"<LD>
        <contact localId="2">
            <variable>Primary</variable>
            <variable>Ignored</variable>
        </contact>
    </LD>"#;

    assert_eq!(build(source)["2"].variable(), "Primary");
}

#[test]
fn test_missing_variable_is_empty() {
    let elements = build(r#"<LD><coil localId="4"/></LD>"#);

    assert_eq!(elements["4"].variable(), "");
    assert!(!elements["4"].negated());
}

#[test]
fn test_negated_values() {
    let source = r#"<LD>
        <contact localId="1" negated="true"/>
        <contact localId="2" negated="1"/>
        <contact localId="3" negated="false"/>
        <contact localId="4" negated="TRUE"/>
        <contact localId="5"/>
    </LD>"#;

    let elements = build(source);
    let negated: Vec<_> = elements.values().map(|element| element.negated()).collect();

    assert_eq!(negated, [true, true, false, false, false]);
}

#[test]
fn test_warnings_do_not_fail_strict_read() {
    let source = r#"<LD>
        <contact><variable>NoId</variable></contact>
        <coil localId="1"><connectionPointIn><connection refLocalId="404"/></connectionPointIn></coil>
    </LD>"#;

    let output = try_build(source).expect("warnings only");
    let codes: Vec<_> = output.warnings().iter().filter_map(|diag| diag.code()).collect();

    assert_eq!(output.elements().len(), 1);
    assert_eq!(codes, [ErrorCode::E200, ErrorCode::E203]);
    assert!(output.warnings().iter().all(|diag| diag.severity() == Severity::Warning));
}

#[test]
fn test_strict_errors() {
    let not_xml = try_build("<<<").unwrap_err();
    assert_eq!(not_xml.diagnostics()[0].code(), Some(ErrorCode::E001));
    assert!(not_xml.diagnostics()[0].help().is_some());

    let no_body = try_build("<project><types/></project>").unwrap_err();
    assert_eq!(no_body.diagnostics()[0].code(), Some(ErrorCode::E100));
    assert!(no_body.to_string().contains("no ladder body"));
}
