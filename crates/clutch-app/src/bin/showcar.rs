//! Standalone showroom stub kept alongside the app core.
//!
//! Builds one hardcoded car record and prints it, nothing more. Run with
//! `cargo run -p clutch-app --features host --bin showcar`.

use anyhow::Result;

#[derive(Debug)]
struct Car {
    make: String,
    model: String,
    year: u32,
    colour: String,
}

impl Car {
    fn new(make: &str, model: &str, year: u32, colour: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
            colour: colour.to_string(),
        }
    }

    fn describe(&self) -> String {
        format!(
            "Car created: {} {}, Year: {}, Colour: {}",
            self.make, self.model, self.year, self.colour
        )
    }
}

fn main() -> Result<()> {
    let car = Car::new("Toyota", "Camry", 2020, "Red");
    println!("{}", car.describe());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_the_expected_line() {
        let car = Car::new("Toyota", "Camry", 2020, "Red");
        assert_eq!(
            car.describe(),
            "Car created: Toyota Camry, Year: 2020, Colour: Red"
        );
    }
}
