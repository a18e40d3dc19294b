mod cmd_args;
mod init;
mod report;

use clap::Parser;
use cmd_args::{CmdArgs, Command};
use locsync_core::{
    BackupPolicy, LocaleStore, all_complete, check_workspace, import_language, load_config,
    sync_workspace, upgrade_workspace,
};

fn main() {
    let args = CmdArgs::parse();
    init::setup_logger(args.verbose);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    }
}

fn run(args: CmdArgs) -> locsync_core::Result<i32> {
    let rc = load_config(args.config.as_deref(), &args.root);
    let store = LocaleStore::from_config(&args.root, &rc);

    match args.command {
        Command::Sync => {
            let outcomes = sync_workspace(&store)?;
            report::print_sync_report(&outcomes);
            Ok(0)
        }
        Command::Check => {
            let reports = check_workspace(&store)?;
            report::print_check_report(&reports);
            Ok(if all_complete(&reports) { 0 } else { 1 })
        }
        Command::Upgrade {
            versioned_backups,
            backup_dir,
        } => {
            let policy = BackupPolicy {
                dir: backup_dir,
                versioned: versioned_backups,
            };
            let master_csv = args.root.join(&rc.master_csv);
            let summary =
                upgrade_workspace(&store, &master_csv, &rc.verified_prefixes, &policy)?;
            report::print_upgrade_report(&summary);
            Ok(if summary.skipped.is_empty() { 0 } else { 1 })
        }
        Command::Import {
            csv,
            language,
            display_name,
            at,
        } => {
            let master_csv = args.root.join(&rc.master_csv);
            let outcome = import_language(&master_csv, &csv, at, &language, &display_name)?;
            report::print_import_report(&master_csv, &language, &outcome);
            Ok(0)
        }
    }
}
