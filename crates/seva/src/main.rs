//! `seva` - CLI for the donation request store
//!
//! This binary lets NGOs post and manage donation requests and lets donors
//! browse the active ones, against the local database.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::debug;

use seva::cli::{
    AddCommand, Cli, Command, ConfigCommand, EditCommand, ListCommand, OutputFormat,
    RemoveCommand, ShowCommand, StatsCommand, StatusCommand,
};
use seva::donation::generate_id;
use seva::{
    init_logging, Config, DonationQuery, DonationRecord, DonationStore, DonorStats, InitOutcome,
    NgoIdentity, NgoStats, SqliteBlobStore, Status,
};

type Store = DonationStore<SqliteBlobStore>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    match cli.command {
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        Command::List(cmd) => handle_list(&open_store(&config)?, &config, &cmd),
        Command::Show(cmd) => handle_show(&open_store(&config)?, &cmd),
        Command::Add(cmd) => handle_add(&mut open_store(&config)?, &cmd),
        Command::Edit(cmd) => handle_edit(&mut open_store(&config)?, &cmd),
        Command::Status(cmd) => handle_status(&mut open_store(&config)?, &cmd),
        Command::Remove(cmd) => handle_remove(&mut open_store(&config)?, &cmd),
        Command::Stats(cmd) => handle_stats(&open_store(&config)?, &config, &cmd),
    }
}

fn open_store(config: &Config) -> Result<Store> {
    let path = config.database_path();
    let backend = SqliteBlobStore::open(&path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    let mut store = DonationStore::from_config(backend, &config.storage);
    match store.initialize().context("failed to load donation requests")? {
        InitOutcome::Recovered => eprintln!(
            "Saved requests were unreadable; a backup was kept and the samples restored."
        ),
        outcome => debug!(?outcome, "Store ready"),
    }
    Ok(store)
}

fn handle_list(store: &Store, config: &Config, cmd: &ListCommand) -> Result<()> {
    let query = DonationQuery {
        search: cmd.search.clone(),
        category: cmd.category.map(Into::into),
        urgency: cmd.urgency.map(Into::into),
        active_only: config.listing.active_only && !cmd.all && cmd.ngo.is_none(),
        ngo_id: cmd.ngo,
    };
    let records = store.query(&query);

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Plain => {
            for record in &records {
                println!("{}\t{}\t{}", record.id, record.status, record.title);
            }
        }
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No donation requests found.");
                return Ok(());
            }
            println!(
                "{:<14} {:<10} {:<7} {:<20} {}",
                "ID", "STATUS", "URGENCY", "CATEGORY", "TITLE"
            );
            for record in &records {
                println!(
                    "{:<14} {:<10} {:<7} {:<20} {}",
                    record.id,
                    record.status.to_string(),
                    record.urgency.to_string(),
                    record.category.label(),
                    record.title
                );
            }
        }
    }
    Ok(())
}

fn find(store: &Store, id: i64) -> Result<&DonationRecord> {
    match store.get(id) {
        Some(record) => Ok(record),
        None => bail!("donation {id} not found"),
    }
}

fn handle_show(store: &Store, cmd: &ShowCommand) -> Result<()> {
    let record = find(store, cmd.id)?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &DonationRecord) {
    println!("{} (#{})", record.title, record.id);
    println!("{}", underline(&record.title));
    println!("Status:      {}", record.status);
    println!("Urgency:     {}", record.urgency);
    println!("Category:    {}", record.category);
    println!("Quantity:    {}", record.quantity);
    println!("Location:    {}", record.location);
    println!("Contact:     {}", record.contact_info);
    println!("Posted by:   {} ({})", record.ngo_name, record.ngo_contact);
    println!("Posted at:   {}", record.posted_at);
    println!();
    println!("{}", record.description);
}

/// Dashes as wide as `title` in characters, capped at 60.
fn underline(title: &str) -> String {
    "-".repeat(title.chars().count().min(60))
}

fn handle_add(store: &mut Store, cmd: &AddCommand) -> Result<()> {
    let ngo = NgoIdentity {
        id: cmd.ngo.id,
        name: cmd.ngo.name.clone(),
        phone: cmd.ngo.phone.clone(),
        email: cmd.ngo.email.clone(),
    };
    let now = Utc::now();
    let record = DonationRecord::from_draft(cmd.draft(), &ngo, generate_id(now), now);
    let id = record.id;

    store.add(record).context("failed to add donation request")?;
    println!("Posted donation request {id}.");
    Ok(())
}

fn handle_edit(store: &mut Store, cmd: &EditCommand) -> Result<()> {
    let existing = find(store, cmd.id)?;
    let mut ngo = existing.ngo_identity();
    if let Some(name) = &cmd.ngo_name {
        ngo.name.clone_from(name);
    }
    if let Some(phone) = &cmd.ngo_phone {
        ngo.phone.clone_from(phone);
    }
    let revised = existing.revise(cmd.apply_to(existing.to_draft()), &ngo);

    store
        .update(revised)
        .context("failed to update donation request")?;
    println!("Updated donation request {}.", cmd.id);
    Ok(())
}

fn handle_status(store: &mut Store, cmd: &StatusCommand) -> Result<()> {
    store
        .set_status(cmd.id, cmd.status.into())
        .context("failed to change status")?;
    println!(
        "Donation request {} is now {}.",
        cmd.id,
        Status::from(cmd.status)
    );
    Ok(())
}

fn handle_remove(store: &mut Store, cmd: &RemoveCommand) -> Result<()> {
    if !cmd.yes {
        let record = find(store, cmd.id)?;
        println!("This will delete \"{}\" (#{}).", record.title, record.id);
        println!("Use --yes to confirm.");
        return Ok(());
    }

    let removed = store
        .remove(cmd.id)
        .context("failed to remove donation request")?;
    println!("Removed \"{}\".", removed.title);
    Ok(())
}

fn handle_stats(store: &Store, config: &Config, cmd: &StatsCommand) -> Result<()> {
    if let Some(ngo_id) = cmd.ngo {
        let stats = NgoStats::compute(store.list(), ngo_id, Utc::now());
        if cmd.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("NGO {ngo_id} dashboard");
            println!("  Total requests:  {}", stats.total);
            println!("  Active:          {}", stats.active);
            println!("  This month:      {}", stats.this_month);
        }
        return Ok(());
    }

    let visible = store.query(&DonationQuery {
        active_only: config.listing.active_only,
        ..DonationQuery::default()
    });
    let stats = DonorStats::compute(&visible);
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Available requests:  {}", stats.available);
        println!("High urgency:        {}", stats.high_urgency);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Key:                {}", config.storage.key);
                println!("  Seed on empty:      {}", config.storage.seed_on_empty);
                println!();
                println!("[Listing]");
                println!("  Active only:        {}", config.listing.active_only);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
