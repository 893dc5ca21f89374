//! Saving and loading application records through the declarative mapper.
//!
//! Run with: cargo run --example records

use jsonic::{load_new, parse, save_into, to_string, FieldBinding, JsonMap, Mappable, Value};
use std::error::Error;

#[derive(Debug, Clone, Default, PartialEq)]
struct Player {
    name: String,
    level: i64,
}

impl Mappable for Player {
    const TYPE_NAME: &'static str = "Player";

    fn bindings() -> Vec<FieldBinding<Self>> {
        vec![
            FieldBinding::new(
                "Name",
                |p| Value::from(p.name.clone()),
                |p, v| {
                    p.name = v.as_string()?.to_string();
                    Ok(())
                },
            ),
            FieldBinding::new(
                "Level",
                |p| Value::from(p.level),
                |p, v| {
                    p.level = v.as_integer()?;
                    Ok(())
                },
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct World {
    seed: i64,
    hardcore: bool,
}

impl Mappable for World {
    const TYPE_NAME: &'static str = "World";

    fn bindings() -> Vec<FieldBinding<Self>> {
        vec![
            FieldBinding::new(
                "Seed",
                |w| Value::from(w.seed),
                |w, v| {
                    w.seed = v.as_integer()?;
                    Ok(())
                },
            ),
            FieldBinding::new(
                "Hardcore",
                |w| Value::from(w.hardcore),
                |w, v| {
                    w.hardcore = v.as_boolean()?;
                    Ok(())
                },
            ),
        ]
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let player = Player {
        name: "Ada".to_string(),
        level: 12,
    };
    let world = World {
        seed: 90125,
        hardcore: false,
    };

    // Both records share one save document, each under its own type name.
    let mut container = JsonMap::new();
    save_into(&mut container, &player);
    save_into(&mut container, &world);
    let document = to_string(&Value::Object(container));
    println!("saved: {document}");

    // Loading pulls each record back out by type name.
    let parsed = parse(&document)?;
    let player_back: Player = load_new(&parsed)?;
    let world_back: World = load_new(&parsed)?;
    assert_eq!(player_back, player);
    assert_eq!(world_back, world);
    println!("restored: {player_back:?}, {world_back:?}");

    // Hand-edited saves load the same way, comments included.
    let edited = parse(
        "{
            'Player': {
                'Name': 'Ada',
                'Level': 99 # admin bump
            }
        }",
    )?;
    let boosted: Player = load_new(&edited)?;
    println!("edited: {boosted:?}");

    Ok(())
}
