// Test whole-document MEI import through the public API

use mei_import::{
    convert_mei, Accidental, Articulation, ImportError, ImportSettings, MusicEvent, Step,
};

const LAYER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE mei>
<mei xmlns="http://www.music-encoding.org/ns/mei" meiversion="4.0.1">
  <music>
    <body>
      <mdiv>
        <score>
          <section>
            <measure n="1">
              <staff n="1">
                <layer n="1">
                  <clef shape="G" line="2"/>
                  <note xml:id="n1" pname="d" accid="s" oct="2" dur="4" dots="1"/>
                  <note xml:id="n2" pname="e" oct="4" dur="8" artic="acc marc-stacc"/>
                  <rest xml:id="r1" dur="2"/>
                  <note pname="b" accid="f" oct="3" dur="16" dots="2" artic="ten-stacc"/>
                </layer>
              </staff>
            </measure>
          </section>
        </score>
      </mdiv>
    </body>
  </music>
</mei>"#;

#[test]
fn test_convert_layer_in_document_order() {
    let result = convert_mei(LAYER, &ImportSettings::default()).unwrap();

    assert_eq!(result.events.len(), 4);
    assert!(result.skipped_elements.is_empty());

    let first = result.events[0].as_note().expect("first event is a note");
    assert_eq!(first.pitch.step, Some(Step::D));
    assert_eq!(first.pitch.accidental, Some(Accidental::Sharp));
    assert_eq!(first.name_with_octave(), "D#2");
    assert_eq!(first.duration.quarter_length, 1.5);
    assert_eq!(first.id.as_deref(), Some("n1"));

    assert_eq!(
        result.events[1].articulations(),
        &[
            Articulation::Accent,
            Articulation::StrongAccent,
            Articulation::Staccato,
        ]
    );
    assert_eq!(result.events[1].quarter_length(), 0.5);

    assert!(result.events[2].is_rest());
    assert_eq!(result.events[2].id(), Some("r1"));
    assert_eq!(result.events[2].quarter_length(), 2.0);

    let last = result.events[3].as_note().unwrap();
    assert_eq!(last.name_with_octave(), "B-3");
    assert_eq!(last.duration.quarter_length, 0.4375);
    assert_eq!(last.duration.type_name(), Some("16th"));
    assert_eq!(last.articulations, vec![Articulation::Tenuto, Articulation::Staccato]);
}

#[test]
fn test_rests_can_be_excluded() {
    let settings = ImportSettings {
        include_rests: false,
        ..ImportSettings::default()
    };
    let result = convert_mei(LAYER, &settings).unwrap();

    assert_eq!(result.events.len(), 3);
    assert!(result.events.iter().all(|e| matches!(e, MusicEvent::Note(_))));
}

const BROKEN: &str = r#"<layer>
  <note xml:id="a" pname="c" oct="4" dur="4"/>
  <note xml:id="b" pname="c" oct="4" dur="3"/>
  <rest xml:id="c" dur="4" dots="x"/>
  <note xml:id="d" pname="g" oct="4" dur="1"/>
</layer>"#;

#[test]
fn test_strict_import_stops_at_first_bad_element() {
    let err = convert_mei(BROKEN, &ImportSettings::default()).unwrap_err();
    match err {
        ImportError::Value(value_err) => {
            assert_eq!(value_err.to_string(), "Unexpected value for \"dur\" attribute: 3");
        }
        other => panic!("Expected value error, got {:?}", other),
    }
}

#[test]
fn test_lenient_import_reports_skipped_elements() {
    let settings = ImportSettings {
        skip_invalid_elements: true,
        ..ImportSettings::default()
    };
    let result = convert_mei(BROKEN, &settings).unwrap();

    let ids: Vec<_> = result.events.iter().map(|e| e.id().unwrap()).collect();
    assert_eq!(ids, vec!["a", "d"]);
    assert_eq!(result.events[1].quarter_length(), 4.0);

    assert_eq!(result.skipped_elements.len(), 2);
    assert_eq!(result.skipped_elements[0].element_type, "note");
    assert_eq!(result.skipped_elements[0].element_id.as_deref(), Some("b"));
    assert_eq!(result.skipped_elements[1].element_type, "rest");
    assert_eq!(
        result.skipped_elements[1].reason,
        "Unexpected value for \"dots\" attribute: x"
    );
}

#[test]
fn test_malformed_xml() {
    let err = convert_mei("<layer><note dur=\"4\"></layer>", &ImportSettings::default()).unwrap_err();
    assert!(matches!(err, ImportError::InvalidXml(_)));
}

#[test]
fn test_settings_deserialize_with_defaults() {
    let settings: ImportSettings = serde_json::from_str(r#"{"skip_invalid_elements": true}"#).unwrap();
    assert!(settings.skip_invalid_elements);
    assert!(settings.include_rests);
}

#[test]
fn test_result_serializes() {
    let result = convert_mei(r#"<note xml:id="x" pname="a" oct="4" dur="4"/>"#, &ImportSettings::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["events"][0]["Note"]["id"], "x");
    assert_eq!(json["events"][0]["Note"]["duration"]["quarter_length"], 1.0);
}
