use crate::catalog::CatalogSource;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<S: CatalogSource>(source: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_topics(source.topics().to_vec()))
}
