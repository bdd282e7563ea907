use std::fmt::Debug;

use csv::ReaderBuilder;
use loadable::{
    records::{GroupDecoder, PersonDecoder},
    sans::{Cursor, Decoder, Int, Seq, Str, primitive::F64},
};

const PATH: &str = "fixtures/scenarios.csv";

#[test]
fn decode_scenarios() {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(PATH)
        .unwrap();

    let mut count = 0;

    for record in reader.records() {
        let record = record.unwrap();
        let (decoder, input, expected, consumed) =
            (&record[0], &record[1], &record[2], &record[3]);

        let tokens: Vec<&str> = input.split('/').collect();
        let mut cursor = Cursor::new(&tokens);

        let found = match decoder {
            "int" => run(Int, &mut cursor),
            "float" => run(F64, &mut cursor),
            "string" => run(Str, &mut cursor),
            "string_seq" => run(Seq::new(Str), &mut cursor),
            "int_seq" => run(Seq::new(Int), &mut cursor),
            "nested_seq" => run(Seq::new(Seq::new(Int)), &mut cursor),
            "person" => run(PersonDecoder, &mut cursor),
            "group" => run(GroupDecoder, &mut cursor),
            other => panic!("Unknown decoder {other:?} in {PATH}."),
        };

        assert_eq!(found, expected, "decoding {input:?} as {decoder}");
        assert_eq!(
            cursor.position().to_string(),
            consumed,
            "tokens consumed decoding {input:?} as {decoder}"
        );

        count += 1;
    }

    assert!(count > 0, "no scenarios in {PATH}");
}

fn run<D: Decoder>(decoder: D, cursor: &mut Cursor<'_>) -> String
where
    D::Output: Debug,
{
    format!("{:?}", decoder.decode(cursor))
}
