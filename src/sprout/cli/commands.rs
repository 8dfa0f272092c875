use super::render::{print_messages, render_card_list, render_full_cards};
use super::setup::{Cli, Commands, PlantFields, ViewArgs};
use super::watch;
use clap::Parser;
use sprout::api::{ConfigAction, SproutApi};
use sprout::config::SproutConfig;
use sprout::error::{Result, SproutError};
use sprout::form::{FormPatch, PlantForm};
use sprout::index::{ListView, SortOrder, SunlightFilter};
use sprout::init::{initialize, resolve_data_dir};
use sprout::store::fs::FileBackend;
use std::io::{self, Write};
use std::time::Duration;

struct AppContext {
    api: SproutApi<FileBackend>,
    config: SproutConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List { view }) => handle_list(&mut ctx, view),
        Some(Commands::View { view, indexes }) => handle_view(&mut ctx, view, indexes),
        Some(Commands::Edit {
            view,
            index,
            fields,
        }) => handle_edit(&mut ctx, view, index, fields),
        Some(Commands::Water { view, yes, indexes }) => handle_water(&mut ctx, view, indexes, yes),
        Some(Commands::Delete { view, yes, indexes }) => {
            handle_delete(&mut ctx, view, indexes, yes)
        }
        Some(Commands::Watch { view, duration }) => handle_watch(&mut ctx, view, duration),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, ViewArgs::default()),
    }
}

/// `RUST_LOG` wins over `--verbose`; without either only warnings show.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let ctx = initialize(&data_dir);

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn list_view(ctx: &AppContext, args: &ViewArgs) -> Result<ListView> {
    let filter = match &args.filter {
        Some(value) => value.parse::<SunlightFilter>().unwrap_or_default(),
        None => SunlightFilter::All,
    };
    let sort = match &args.sort {
        Some(value) => value.parse::<SortOrder>().map_err(SproutError::Validation)?,
        None => ctx.config.default_sort,
    };
    Ok(ListView::new(filter, sort))
}

fn to_patch(fields: PlantFields) -> FormPatch {
    FormPatch {
        name: fields.name,
        species: fields.species,
        watering_frequency: fields.every,
        sunlight: fields.sunlight,
        notes: fields.notes,
        image: fields.image,
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Names of the plants behind `indexes`, quoted and comma separated.
fn describe(ctx: &AppContext, view: &ListView, indexes: &[String]) -> Result<String> {
    let result = ctx.api.view_plants(view, indexes)?;
    let names: Vec<String> = result
        .cards
        .iter()
        .map(|card| format!("\"{}\"", card.entry.plant.name))
        .collect();
    Ok(names.join(", "))
}

fn sweep_alerts(ctx: &AppContext) {
    if ctx.config.alerts {
        print_messages(&ctx.api.alerts().messages);
    }
}

fn handle_add(ctx: &mut AppContext, fields: PlantFields) -> Result<()> {
    let mut form = PlantForm {
        sunlight: ctx.config.sunlight_options.first().cloned().unwrap_or_default(),
        ..PlantForm::default()
    };
    to_patch(fields).apply_to(&mut form);

    let result = ctx.api.create_plant(&form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, args: ViewArgs) -> Result<()> {
    let view = list_view(ctx, &args)?;
    sweep_alerts(ctx);

    let result = ctx.api.list_plants(&view)?;
    let hint = if ctx.api.store().is_empty() {
        "No plants yet. Add one with `sprout add --name <name> --every <days>`."
    } else {
        "No plants found."
    };
    print!("{}", render_card_list(&result.cards, hint));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, args: ViewArgs, indexes: Vec<String>) -> Result<()> {
    let view = list_view(ctx, &args)?;
    let result = ctx.api.view_plants(&view, &indexes)?;
    print!("{}", render_full_cards(&result.cards, ctx.api.clock().now()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    args: ViewArgs,
    index: String,
    fields: PlantFields,
) -> Result<()> {
    let view = list_view(ctx, &args)?;
    let patch = to_patch(fields);
    if patch.is_empty() {
        return Err(SproutError::Validation(
            "Nothing to change: pass at least one of --name, --species, --every, --sunlight, --notes or --image".into(),
        ));
    }

    let result = ctx.api.edit_plant(&view, &index, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_water(
    ctx: &mut AppContext,
    args: ViewArgs,
    indexes: Vec<String>,
    yes: bool,
) -> Result<()> {
    let view = list_view(ctx, &args)?;
    if !yes {
        let names = describe(ctx, &view, &indexes)?;
        if !confirm(&format!("Mark {} as watered now?", names))? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.water_plants(&view, &indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(
    ctx: &mut AppContext,
    args: ViewArgs,
    indexes: Vec<String>,
    yes: bool,
) -> Result<()> {
    let view = list_view(ctx, &args)?;
    if !yes {
        let names = describe(ctx, &view, &indexes)?;
        if !confirm(&format!("Delete {}?", names))? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_plants(&view, &indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_watch(ctx: &mut AppContext, args: ViewArgs, duration: Option<u64>) -> Result<()> {
    let view = list_view(ctx, &args)?;
    sweep_alerts(ctx);
    watch::run(&ctx.api, view, duration.map(Duration::from_secs))
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
