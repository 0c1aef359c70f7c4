//! Menu loop: add / search / update / delete products.
//!
//! Generic over its input and output so a whole session can be scripted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, LoadOutcome, StoreError};
use stockroom_products::{Product, TYPE_ELECTRONIC, TYPE_PERISHABLE};
use thiserror::Error;

const MENU: &str = "\nInventory Menu
1. Add product
2. Search product
3. Update product
4. Delete product
5. Exit";

/// Why a single menu action stopped early.
#[derive(Debug, Error)]
enum ActionError {
    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Menu<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Tell the user when startup found no usable inventory file.
    pub fn announce_load(&mut self, outcome: &LoadOutcome) -> io::Result<()> {
        match outcome {
            LoadOutcome::Loaded { .. } => Ok(()),
            LoadOutcome::MissingFile => writeln!(
                self.output,
                "Inventory file not found. Starting with an empty inventory."
            ),
            LoadOutcome::Malformed { reason } => writeln!(
                self.output,
                "Could not decode the inventory file ({reason}). Starting with an empty inventory."
            ),
        }
    }

    /// Run until the user picks "Exit" or input ends.
    ///
    /// Invalid input, validation errors and failed saves are reported and the
    /// loop continues. Only failures writing to the output are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.prompt("Select an option: ") {
                Ok(choice) => choice,
                Err(ActionError::Io(err)) => return Err(err),
                Err(_) => return Ok(()),
            };

            let result = match choice.trim() {
                "1" => self.add_product(),
                "2" => self.search_product(),
                "3" => self.update_product(),
                "4" => self.delete_product(),
                "5" => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(ActionError::EndOfInput) => return Ok(()),
                Err(ActionError::Io(err)) => return Err(err),
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
    }

    fn add_product(&mut self) -> Result<(), ActionError> {
        let name = self.prompt_name("Product name: ")?;
        let price: f64 = self.prompt_number("Price: ", "price")?;
        let quantity: i64 = self.prompt_number("Quantity: ", "quantity")?;
        let kind = self.prompt("Type (electronico/alimenticio): ")?;

        let product = match kind.trim() {
            TYPE_ELECTRONIC => {
                let brand = self.prompt("Brand: ")?;
                Product::electronic(name, price, quantity, brand.trim())?
            }
            TYPE_PERISHABLE => {
                let expiration_date = self.prompt("Expiration date: ")?;
                Product::perishable(name, price, quantity, expiration_date.trim())?
            }
            _ => Product::new(name, price, quantity)?,
        };

        self.inventory.add(product)?;
        writeln!(self.output, "Product added.")?;
        Ok(())
    }

    fn search_product(&mut self) -> Result<(), ActionError> {
        let name = self.prompt_name("Name of the product to search: ")?;
        match self.inventory.find(&name) {
            Some(product) => writeln!(self.output, "Product found: {product}")?,
            None => writeln!(self.output, "Product not found.")?,
        }
        Ok(())
    }

    fn update_product(&mut self) -> Result<(), ActionError> {
        let name = self.prompt_name("Name of the product to update: ")?;
        let price: f64 = self.prompt_number("New price: ", "price")?;
        let quantity: i64 = self.prompt_number("New quantity: ", "quantity")?;

        let Some(current) = self.inventory.find(&name) else {
            writeln!(self.output, "Product not found.")?;
            return Ok(());
        };

        // Work on a copy so a rejected value leaves the stored product intact.
        let mut updated = current.clone();
        updated.set_price(price)?;
        updated.set_quantity(quantity)?;

        self.inventory.update(&name, updated)?;
        writeln!(self.output, "Product updated.")?;
        Ok(())
    }

    fn delete_product(&mut self) -> Result<(), ActionError> {
        let name = self.prompt_name("Name of the product to delete: ")?;
        if self.inventory.remove(&name)? {
            writeln!(self.output, "Product deleted.")?;
        } else {
            writeln!(self.output, "Product not found.")?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, ActionError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ActionError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_name(&mut self, label: &str) -> Result<String, ActionError> {
        let name = self.prompt(label)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::Input("name cannot be empty".to_string()));
        }
        Ok(name.to_string())
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T, ActionError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|_| ActionError::Input(format!("{field} must be a number, got {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(inventory: Inventory, script: &str) -> (Inventory, String) {
        let mut output = Vec::new();
        let mut menu = Menu::new(inventory, Cursor::new(script.as_bytes()), &mut output);
        menu.run().unwrap();
        let inventory = menu.into_inventory();
        (inventory, String::from_utf8(output).unwrap())
    }

    fn temp_inventory() -> (TempDir, Inventory) {
        let dir = tempfile::tempdir().unwrap();
        let inventory = Inventory::new(dir.path().join("productos.json"));
        (dir, inventory)
    }

    #[test]
    fn adds_and_finds_an_electronic_product() {
        let (_dir, inventory) = temp_inventory();
        let script = "1\nLaptop\n120000\n10\nelectronico\nLenovo\n2\nLaptop\n5\n";

        let (inventory, output) = run_session(inventory, script);

        assert!(output.contains("Product added."));
        assert!(output.contains("Product found: Laptop (Lenovo): $120000 (10 available)"));
        assert!(output.ends_with("Exiting.\n"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn adds_perishable_and_generic_products() {
        let (_dir, inventory) = temp_inventory();
        let script = "1\nMilk\n3.5\n50\nalimenticio\n2024-08-31\n1\nPencil\n0.75\n200\n\n5\n";

        let (inventory, _output) = run_session(inventory, script);

        assert_eq!(
            inventory.products(),
            &[
                Product::perishable("Milk", 3.5, 50, "2024-08-31").unwrap(),
                Product::new("Pencil", 0.75, 200).unwrap(),
            ]
        );
    }

    #[test]
    fn deletes_a_product() {
        let (_dir, mut inventory) = temp_inventory();
        inventory
            .add(Product::perishable("Milk", 3.5, 50, "2024-08-31").unwrap())
            .unwrap();

        let (inventory, output) = run_session(inventory, "4\nMilk\n4\nMilk\n5\n");

        assert!(output.contains("Product deleted."));
        assert!(output.contains("Product not found."));
        assert!(inventory.is_empty());
    }

    #[test]
    fn updates_price_and_quantity_keeping_variant() {
        let (_dir, mut inventory) = temp_inventory();
        inventory
            .add(Product::electronic("Laptop", 120000.0, 10, "Lenovo").unwrap())
            .unwrap();

        let (inventory, output) = run_session(inventory, "3\nLaptop\n99000\n7\n5\n");

        assert!(output.contains("Product updated."));
        assert_eq!(
            inventory.find("Laptop"),
            Some(&Product::electronic("Laptop", 99000.0, 7, "Lenovo").unwrap())
        );
    }

    #[test]
    fn rejected_update_leaves_product_untouched() {
        let (_dir, mut inventory) = temp_inventory();
        let original = Product::new("Pencil", 0.75, 200).unwrap();
        inventory.add(original.clone()).unwrap();

        let (inventory, output) = run_session(inventory, "3\nPencil\n1.25\n-4\n5\n");

        assert!(output.contains("Error: invalid value: quantity cannot be negative"));
        assert_eq!(inventory.find("Pencil"), Some(&original));
    }

    #[test]
    fn update_of_missing_product_reports_not_found() {
        let (_dir, inventory) = temp_inventory();

        let (_inventory, output) = run_session(inventory, "3\nGhost\n1\n1\n5\n");

        assert!(output.contains("Product not found."));
    }

    #[test]
    fn bad_number_abandons_the_action() {
        let (_dir, inventory) = temp_inventory();

        let (inventory, output) = run_session(inventory, "1\nLaptop\nexpensive\n5\n");

        assert!(output.contains("Error: price must be a number"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn negative_price_on_add_is_reported() {
        let (_dir, inventory) = temp_inventory();

        let (inventory, output) = run_session(inventory, "1\nLaptop\n-1\n1\n\n5\n");

        assert!(output.contains("Error: invalid value: price cannot be negative"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let (_dir, inventory) = temp_inventory();

        let (_inventory, output) = run_session(inventory, "2\n   \n5\n");

        assert!(output.contains("Error: name cannot be empty"));
    }

    #[test]
    fn invalid_option_prompts_again() {
        let (_dir, inventory) = temp_inventory();

        let (_inventory, output) = run_session(inventory, "9\n5\n");

        assert!(output.contains("Invalid option. Try again."));
        assert!(output.ends_with("Exiting.\n"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (_dir, inventory) = temp_inventory();

        let (_inventory, output) = run_session(inventory, "1\nLaptop\n");

        assert!(!output.contains("Exiting."));
    }

    #[test]
    fn failed_save_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = Inventory::new(dir.path().join("missing").join("productos.json"));

        let (inventory, output) = run_session(inventory, "1\nPencil\n1\n1\n\n5\n");

        assert!(output.contains("Error: I/O failure on"));
        assert!(output.ends_with("Exiting.\n"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn announces_missing_and_malformed_files() {
        let (_dir, inventory) = temp_inventory();
        let mut output = Vec::new();
        let mut menu = Menu::new(inventory, Cursor::new(&b""[..]), &mut output);

        menu.announce_load(&LoadOutcome::Loaded { count: 2 }).unwrap();
        menu.announce_load(&LoadOutcome::MissingFile).unwrap();
        menu.announce_load(&LoadOutcome::Malformed {
            reason: "EOF while parsing".to_string(),
        })
        .unwrap();
        drop(menu);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Inventory file not found. Starting with an empty inventory.\n\
             Could not decode the inventory file (EOF while parsing). Starting with an empty inventory.\n"
        );
    }
}
