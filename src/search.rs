//! Search Workflow
//!
//! Runs the populated form fields against the API and derives the marked
//! film set.

use std::collections::HashSet;

use crate::api::{ApiResult, FilmApi};
use crate::form::FormState;
use crate::models::Film;

/// New film set with `marked` set iff the film's url is in `urls`
pub fn mark_films(films: &[Film], urls: &HashSet<String>) -> Vec<Film> {
    films
        .iter()
        .map(|film| Film {
            marked: urls.contains(&film.url),
            ..film.clone()
        })
        .collect()
}

/// Search every populated field, in category order, one at a time.
///
/// Each finished search hands its url lookup to `publish`, which replaces
/// the current marks. With more than one populated field the last one
/// wins. Returns the number of searches issued; the first failed request
/// aborts the loop.
pub async fn submit<C>(
    client: &C,
    form: &FormState,
    mut publish: impl FnMut(&HashSet<String>),
) -> ApiResult<usize>
where
    C: FilmApi + ?Sized,
{
    let populated: Vec<_> = form.populated().collect();
    if populated.len() > 1 {
        log::warn!("[SEARCH] {} fields populated, last one wins", populated.len());
    }

    let mut searches = 0;
    for (category, query) in populated {
        log::info!("[SEARCH] {} = {:?}", category, query);
        let urls = client.search(query, category).await?;
        searches += 1;
        let lookup: HashSet<String> = urls.into_iter().collect();
        log::debug!("[SEARCH] {} films referenced", lookup.len());
        publish(&lookup);
    }
    Ok(searches)
}
