use std::process;

use clap::Args;
use spanfmt::flags::{table_by_name, FlagTable};

#[derive(Args)]
pub struct FlagsArgs {
    /// Flag table: symbol or type
    pub table: String,
    /// Flag value (decimal, 0x hex or 0b binary) to name, or comma-separated
    /// names (e.g. Class,Function) to turn into a value; omit with --list
    #[arg(required_unless_present = "list")]
    pub value: Option<String>,
    /// List every bit of the table instead
    #[arg(long)]
    pub list: bool,
}

pub fn cmd_flags(args: FlagsArgs) {
    let FlagsArgs { table, value, list } = args;
    let Some(table) = table_by_name(&table) else {
        eprintln!("error: unknown flag table '{}' (expected 'symbol' or 'type')", table);
        process::exit(1);
    };

    if list {
        print_table(&table);
        return;
    }

    let Some(value) = value else {
        eprintln!("error: missing flag value");
        process::exit(1);
    };
    let starts_numeric = value.trim_start().starts_with(|c: char| c.is_ascii_digit());
    let result = if starts_numeric {
        parse_flag_value(&value).map(|flags| table.format(flags))
    } else {
        parse_flag_names(&table, &value).map(|flags| format!("{:#x} ({})", flags, flags))
    };
    match result {
        Ok(line) => println!("{}", line),
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(1);
        }
    }
}

fn print_table(table: &FlagTable) {
    println!("{}:", table.name);
    for (bit, name) in table.entries() {
        println!("  {:#010x}  {}", bit, name);
    }
}

/// Parse `42`, `0x2a` or `0b101010`.
fn parse_flag_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|e| format!("invalid flag value '{}': {}", s, e))
}

/// Combine `Class,Function` style names into one flag value.
fn parse_flag_names(table: &FlagTable, s: &str) -> Result<u32, String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(0u32, |acc, name| match table.parse(name) {
            Some(bit) => Ok(acc | bit),
            None => Err(format!("'{}' is not a {} name", name, table.name)),
        })
}
