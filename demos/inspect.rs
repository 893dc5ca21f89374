//! Parsing a commented document and walking the resulting value tree.
//!
//! Run with: cargo run --example inspect

use jsonic::{parse, to_string, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "
        # deployment manifest
        {
            'service': 'billing',
            'replicas': 3, // bumped for launch week
            'ports': [8080, 8443],
            'flags': {
                'canary': TRUE, /* rollout gate */
                'drain_timeout': 2.5
            }
        }
    ";

    let manifest = parse(text)?;

    let fields = manifest.as_object()?;
    println!("service:  {}", fields.get("service").unwrap().as_string()?);
    println!("replicas: {}", fields.get("replicas").unwrap().as_integer()?);

    let ports = fields.get("ports").unwrap().as_array()?;
    for port in ports {
        println!("port:     {}", port.as_integer()?);
    }

    // Wrong-variant access reports both sides of the mismatch.
    let err = fields.get("service").unwrap().as_integer().unwrap_err();
    println!("mismatch: {err}");

    // Writing strips comments and whitespace into canonical compact form.
    println!("compact:  {}", to_string(&manifest));

    // Syntax errors carry the line and column where they were detected.
    if let Err(err) = parse("{'a': tru}") {
        println!("error:    {err}");
    }

    // Display on Value is the same compact form.
    let inline: Value = parse("[1, 2.0, 'three']")?;
    println!("display:  {inline}");

    Ok(())
}
