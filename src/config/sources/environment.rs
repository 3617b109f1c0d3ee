//! Environment source: FILEREV_<SECTION>__<KEY>, e.g. FILEREV_OPTIONS__LENGTH=12

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FILEREV")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
