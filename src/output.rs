use crate::cli::OutputFormat;
use crate::models::{ApiResponse, Pet, ResponseBody};
use console::style;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Tabled)]
pub struct PetRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub animal_type: String,
    #[tabled(rename = "Age")]
    pub age: String,
    #[tabled(rename = "Photo")]
    pub photo: String,
}

impl From<&Pet> for PetRow {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            animal_type: pet.animal_type.clone(),
            age: pet.age.clone(),
            photo: (if pet.pet_photo.is_empty() { "-" } else { "yes" }).to_string(),
        }
    }
}

/// Print data as a table
pub fn print_table<T: Tabled>(data: Vec<T>) {
    if data.is_empty() {
        println!("{}", style("No pets found").dim());
        return;
    }
    let table = Table::new(data).to_string();
    println!("{}", table);
}

/// Print data as JSON
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print the status line followed by the body as-is
pub fn print_response(response: &ApiResponse) -> anyhow::Result<()> {
    print_status(response.status);
    match &response.body {
        ResponseBody::Json(value) => print_json(value)?,
        ResponseBody::Text(text) => println!("{}", text),
    }
    Ok(())
}

/// Print a pet list response in the requested format.
///
/// Falls back to [`print_response`] when the body is not a pet list.
pub fn print_pets(format: OutputFormat, response: &ApiResponse) -> anyhow::Result<()> {
    let pets = match response.pets() {
        Ok(pets) => pets,
        Err(_) => return print_response(response),
    };

    match format {
        OutputFormat::Table => {
            print_status(response.status);
            let rows: Vec<PetRow> = pets.iter().map(PetRow::from).collect();
            print_table(rows);
        }
        OutputFormat::Json => {
            print_json(&pets)?;
        }
    }
    Ok(())
}

pub fn print_status(status: u16) {
    if (200..300).contains(&status) {
        eprintln!("{} {}", style("✓").green(), style(format!("HTTP {}", status)).bold());
    } else {
        eprintln!("{} {}", style("✗").red(), style(format!("HTTP {}", status)).bold());
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}
