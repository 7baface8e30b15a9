use anyhow::{Context, Result};

use crate::cli_commands::tokens::{CreateTokenArgs, TokensArgs};
use crate::cli_runtime::Session;

pub(super) fn handle_tokens(session: &Session, args: TokensArgs) -> Result<()> {
    let pending = session
        .client
        .list_tokens_request(args.page, args.search.as_deref());
    let tokens = session
        .client
        .tokens_from_reply(pending.wait())
        .context("list tokens")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tokens).context("serialize token list json")?
        );
    } else {
        for t in tokens {
            let default = if t.is_default == Some(true) {
                " default"
            } else {
                ""
            };
            println!("{} {} [{}]{}", t.id, t.name, t.scopes.join(","), default);
        }
    }
    Ok(())
}

pub(super) fn handle_create_token(session: &Session, args: CreateTokenArgs) -> Result<()> {
    let scopes = args.scopes.iter().map(String::as_str).collect::<Vec<_>>();
    let token = session
        .client
        .create_token(&args.name, &scopes, &args.asset_ids)
        .context("create token")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&token).context("serialize token json")?
        );
    } else {
        println!("Created token {} ({})", token.name, token.id);
        if let Some(secret) = token.secret() {
            println!("{}", secret);
        }
    }
    Ok(())
}
