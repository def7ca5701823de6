//! Menu-driven shell over one warehouse.

use std::io::{self, BufRead, Write};

use stockyard_core::{ItemId, Price};
use stockyard_inventory::Warehouse;

/// Interactive menu loop bound to a reader and a writer.
///
/// Generic over the streams so tests can drive a whole session through
/// in-memory buffers. The shell owns the one explicitly constructed
/// [`Warehouse`]; every user entry is parsed here, handed to the store, and
/// the result (or error) rendered back. A rejected operation never ends the
/// session.
pub struct Shell<R, W> {
    warehouse: Warehouse,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(warehouse: Warehouse, input: R, output: W) -> Self {
        Self {
            warehouse,
            input,
            output,
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to {}", self.warehouse.name())?;
        loop {
            self.write_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_item()?,
                "2" => self.restock_item()?,
                "3" => self.sell_item()?,
                "4" => self.show_item()?,
                "5" => self.search_items()?,
                "6" => {
                    writeln!(self.output, "Bye")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid entry")?,
            }
        }
        self.output.flush()
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "1. Add a new product")?;
        writeln!(self.output, "2. Procure existing product")?;
        writeln!(self.output, "3. Sell product")?;
        writeln!(self.output, "4. Get item by id")?;
        writeln!(self.output, "5. Search items by name")?;
        writeln!(self.output, "6. Quit")
    }

    /// Write a prompt and read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_item_id(&mut self) -> io::Result<Option<ItemId>> {
        let Some(raw) = self.prompt("Enter the product id: ")? else {
            return Ok(None);
        };
        match ItemId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                writeln!(self.output, "{err}")?;
                Ok(None)
            }
        }
    }

    fn prompt_quantity(&mut self) -> io::Result<Option<i64>> {
        let Some(raw) = self.prompt("Enter number of items: ")? else {
            return Ok(None);
        };
        match raw.parse::<i64>() {
            Ok(quantity) => Ok(Some(quantity)),
            Err(_) => {
                writeln!(self.output, "Not a whole number: {raw}")?;
                Ok(None)
            }
        }
    }

    fn add_item(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_item_id()? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter the product name: ")? else {
            return Ok(());
        };
        let Some(raw_price) = self.prompt("Enter the price of product: ")? else {
            return Ok(());
        };
        let price = match raw_price.parse::<Price>() {
            Ok(price) => price,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        let Some(quantity) = self.prompt_quantity()? else {
            return Ok(());
        };
        if quantity < 0 {
            writeln!(self.output, "Initial stock cannot be negative")?;
            return Ok(());
        }

        match self
            .warehouse
            .create_item(id.clone(), name, price, quantity as u64)
        {
            Ok(()) => {
                tracing::info!(item_id = %id, "item added");
                writeln!(self.output, "Added {id}")
            }
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn restock_item(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_item_id()? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_quantity()? else {
            return Ok(());
        };
        match self.warehouse.restock_item(&id, quantity) {
            Ok(()) => {
                tracing::info!(item_id = %id, quantity, "stock received");
                writeln!(self.output, "Restocked {id}")
            }
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn sell_item(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_item_id()? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_quantity()? else {
            return Ok(());
        };
        match self.warehouse.sell_item(&id, quantity) {
            Ok(()) => {
                tracing::info!(item_id = %id, quantity, "stock sold");
                writeln!(self.output, "Sold {quantity} x {id}")
            }
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn show_item(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_item_id()? else {
            return Ok(());
        };
        match self.warehouse.find_by_id(&id) {
            Some(item) => writeln!(self.output, "{item}"),
            None => writeln!(self.output, "Item not found"),
        }
    }

    fn search_items(&mut self) -> io::Result<()> {
        let Some(fragment) = self.prompt("Enter the product name: ")? else {
            return Ok(());
        };
        let hits = self.warehouse.find_by_name(&fragment);
        if hits.is_empty() {
            writeln!(self.output, "No matching items")?;
            return Ok(());
        }
        for item in hits {
            writeln!(self.output, "{item}")?;
        }
        Ok(())
    }
}
