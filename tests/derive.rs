#![cfg(feature = "derive")]

use loadable::{
    avec::{Auto, FromTokens, decode_str},
    records::{Group, GroupDecoder, Person},
    sans::{
        Cursor, DecodeError, ExhaustedInputError, FormatError, Seq, Str, from_fn, primitive::U8,
    },
};
use tinyvec::ArrayVec;

#[derive(Debug, PartialEq, FromTokens)]
struct Employee {
    name: String,
    age: i32,
}

#[derive(Debug, PartialEq, FromTokens)]
struct Company {
    name: String,
    employees: Vec<Employee>,
}

#[test]
fn decode_derived_company() {
    let company: Company = decode_str("CatWorld/3/tama/5/mike/6/kuro/7", Auto::new()).unwrap();

    assert_eq!(
        company,
        Company {
            name: "CatWorld".into(),
            employees: vec![
                Employee {
                    name: "tama".into(),
                    age: 5
                },
                Employee {
                    name: "mike".into(),
                    age: 6
                },
                Employee {
                    name: "kuro".into(),
                    age: 7
                },
            ],
        }
    );
}

#[test]
fn derived_matches_hand_written() {
    const SOURCE: &str = "CatWorld/2/tama/5/mike/6";

    let derived: Company = decode_str(SOURCE, Auto::new()).unwrap();
    let written: Group = decode_str(SOURCE, GroupDecoder).unwrap();

    assert_eq!(derived.name, written.name);
    assert_eq!(derived.employees.len(), written.members.len());

    for (e, m) in derived.employees.iter().zip(&written.members) {
        assert_eq!((&e.name, e.age), (&m.name, m.age));
    }
}

#[derive(Debug, FromTokens)]
struct Litter {
    #[decode(Seq::new(Str).collect::<ArrayVec<[String; 4]>>())]
    names: ArrayVec<[String; 4]>,
    #[decode(U8)]
    weeks: u8,
    mother: Person,
}

#[test]
fn decode_with_field_decoders() {
    let litter: Litter = decode_str("2/tama/kuro/8/mike/6", Auto::new()).unwrap();

    assert_eq!(litter.names.as_slice(), ["tama", "kuro"]);
    assert_eq!(litter.weeks, 8);
    assert_eq!(
        litter.mother,
        Person {
            name: "mike".into(),
            age: 6
        }
    );
}

#[test]
fn fields_decode_in_declaration_order() {
    #[derive(Debug, FromTokens)]
    struct Swapped {
        age: i32,
        name: String,
    }

    let swapped: Swapped = decode_str("5/tama", Auto::new()).unwrap();
    assert_eq!((swapped.age, swapped.name.as_str()), (5, "tama"));

    let err = decode_str::<Auto<Swapped>>("tama/5", Auto::new()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Format(FormatError::Malformed { position: 0, .. })
    ));
}

#[test]
fn failing_field_aborts_record() {
    let tokens = ["CatWorld", "2", "tama", "5", "mike"];
    let mut cursor = Cursor::new(&tokens);

    let err = Company::from_tokens(&mut cursor).unwrap_err();

    assert_eq!(err, DecodeError::Exhausted(ExhaustedInputError { position: 5 }));
    assert!(cursor.is_empty());
}

#[derive(Debug, PartialEq, FromTokens)]
struct Pair<A, B> {
    first: A,
    second: B,
}

#[test]
fn decode_generic_record() {
    let pair: Pair<String, Vec<u16>> = decode_str("id/2/80/443", Auto::new()).unwrap();

    assert_eq!(
        pair,
        Pair {
            first: "id".into(),
            second: vec![80, 443],
        }
    );
}

#[derive(Debug, FromTokens)]
struct Shadowing {
    #[decode(from_fn(|cursor| Ok(cursor.next()?.len())))]
    cursor: usize,
    rest: String,
}

#[test]
fn closure_field_decoder() {
    let s: Shadowing = decode_str("abcd/efg/ignored", Auto::new()).unwrap();
    assert_eq!((s.cursor, s.rest.as_str()), (4, "efg"));
}
