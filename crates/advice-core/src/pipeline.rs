//! Dataset construction from an advisory source.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::aliases::CountryAliases;
use crate::dataset::{AdviceDataset, CountryRow};
use crate::error::AdviceError;
use crate::source::{AdviceSource, AdvisoryIndex};

/// Build the travel-advice dataset from an advisory index.
///
/// Countries are fetched strictly in index order, one at a time, and
/// rows are appended in fetch order. A country whose URL is malformed is
/// skipped; any other per-country failure aborts the build. Each row's
/// name is rewritten through `aliases` as it is appended, and every row
/// carries the full column set on return.
pub async fn build_advice_dataset<S>(
    source: &S,
    index: &AdvisoryIndex,
    aliases: &CountryAliases,
) -> Result<AdviceDataset, AdviceError>
where
    S: AdviceSource + ?Sized,
{
    let mut dataset = AdviceDataset::new();

    for (country, url) in index {
        let content = match source.country_content(url).await {
            Ok(content) => content,
            Err(AdviceError::MalformedUrl(bad_url)) => {
                warn!(country = %country, url = %bad_url, "Skipping country with malformed advisory URL");
                continue;
            }
            Err(err) => return Err(err),
        };

        // Later parts win on a duplicate slug.
        let mut sections = IndexMap::new();
        for part in content.parts {
            sections.insert(part.slug, part.body);
        }

        debug!(country = %content.name, sections = sections.len(), "Fetched advisory content");
        dataset.push(CountryRow {
            name: aliases.resolve(&content.name),
            sections,
        });
    }

    dataset.fill_missing();
    Ok(dataset)
}
