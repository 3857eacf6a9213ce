use crate::core::command::{ItemChoice, ShapeChoice};
use crate::core::prompt::{ask, ask_real, warn};
use crate::domain::ports::{Console, Question};
use crate::utils::error::Result;
use std::f64::consts::PI;

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quotient {
    Value(f64),
    DivideByZero,
}

impl std::fmt::Display for Quotient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quotient::Value(value) => write!(f, "{}", value),
            Quotient::DivideByZero => write!(f, "{}", DIVIDE_BY_ZERO),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub a: f64,
    pub b: f64,
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    pub quotient: Quotient,
}

impl Calculation {
    pub fn lines(&self) -> [String; 4] {
        let (a, b) = (self.a, self.b);
        [
            format!("Sum: {} + {} = {}", a, b, self.sum),
            format!("Difference: {} - {} = {}", a, b, self.difference),
            format!("Product: {} × {} = {}", a, b, self.product),
            format!("Division: {} ÷ {} = {}", a, b, self.quotient),
        ]
    }
}

pub fn calculate(a: f64, b: f64) -> Calculation {
    let quotient = if b == 0.0 {
        Quotient::DivideByZero
    } else {
        Quotient::Value(a / b)
    };

    Calculation {
        a,
        b,
        sum: a + b,
        difference: a - b,
        product: a * b,
        quotient,
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

pub fn format_temperature(celsius: f64) -> String {
    format!(
        "{}°C = {:.2}°F = {:.2}K",
        celsius,
        celsius_to_fahrenheit(celsius),
        celsius_to_kelvin(celsius)
    )
}

pub fn square_area(side: f64) -> f64 {
    side * side
}

pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Question 1: calculator, temperature conversion and shape areas.
pub struct Basics;

impl Basics {
    fn simple_calculator(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🧮 SIMPLE CALCULATOR")?;
        let Some(a) = ask_real(
            console,
            "Enter the first number: ",
            "first number",
            "Invalid numbers!",
        )?
        else {
            return Ok(());
        };
        let Some(b) = ask_real(
            console,
            "Enter the second number: ",
            "second number",
            "Invalid numbers!",
        )?
        else {
            return Ok(());
        };

        for line in calculate(a, b).lines() {
            console.writeln(&line)?;
        }
        Ok(())
    }

    fn temperature_conversion(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🌡️ TEMPERATURE CONVERSION")?;
        if let Some(celsius) = ask_real(
            console,
            "Enter the temperature in Celsius: ",
            "temperature",
            "Invalid temperature!",
        )? {
            console.writeln(&format_temperature(celsius))?;
        }
        Ok(())
    }

    fn shape_area(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n📐 AREA OF GEOMETRIC SHAPES")?;
        console.writeln("1. Square | 2. Rectangle | 3. Circle")?;
        let Some(raw) = ask(console, "Choose the shape: ")? else {
            return Ok(());
        };

        match ShapeChoice::parse(&raw) {
            ShapeChoice::Square => {
                if let Some(side) = ask_real(
                    console,
                    "Enter the side of the square: ",
                    "side",
                    "Invalid side!",
                )? {
                    console.writeln(&format!("Square area: {:.2}", square_area(side)))?;
                }
            }
            ShapeChoice::Rectangle => {
                let Some(width) =
                    ask_real(console, "Enter the width: ", "width", "Invalid width!")?
                else {
                    return Ok(());
                };
                if let Some(height) =
                    ask_real(console, "Enter the height: ", "height", "Invalid height!")?
                {
                    let area = rectangle_area(width, height);
                    console.writeln(&format!("Rectangle area: {:.2}", area))?;
                }
            }
            ShapeChoice::Circle => {
                if let Some(radius) =
                    ask_real(console, "Enter the radius: ", "radius", "Invalid radius!")?
                {
                    console.writeln(&format!("Circle area: {:.2}", circle_area(radius)))?;
                }
            }
            ShapeChoice::Unrecognized(code) => {
                tracing::debug!("Unrecognized shape code: {:?}", code);
                warn(console, "Invalid shape!")?;
            }
        }
        Ok(())
    }
}

impl Question for Basics {
    fn header(&self) -> &str {
        "🔢 QUESTION 1 - BASICS"
    }

    fn items(&self) -> [&str; 3] {
        [
            "Simple Calculator",
            "Temperature Conversion",
            "Area of Geometric Shapes",
        ]
    }

    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()> {
        match item {
            ItemChoice::First => self.simple_calculator(console),
            ItemChoice::Second => self.temperature_conversion(console),
            ItemChoice::Third => self.shape_area(console),
            ItemChoice::Unrecognized(_) => warn(console, "Invalid item!"),
        }
    }
}
