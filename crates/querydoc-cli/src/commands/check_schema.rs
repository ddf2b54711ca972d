use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use querydoc::schema::SchemaIndex;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckSchemaCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema definition files or directories \
             containing schema definition files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CheckSchemaCmd {
    fn find_schema_files(
        &self,
        errors: &mut Vec<String>,
    ) -> (Vec<PathBuf>, usize) {
        let schema_file_exts: HashSet<&str> =
            self.schema_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if has_schema_file_ext(path, &schema_file_exts) {
                            log::trace!("Found schema file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.to_string());
                    },
                }
            }
        }

        // A single file passed explicitly is checked whatever its extension.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --schema-file-exts ({}).",
                self.schema_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        (file_paths, num_skipped_files)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckSchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];
        let (file_paths, num_skipped_files) = self.find_schema_files(&mut errors);
        log::debug!("Found {} schema files to be checked.", file_paths.len());

        let mut num_object_types = 0;
        let mut num_input_types = 0;
        let mut num_enum_types = 0;
        for file_path in &file_paths {
            let content = match file_reader::read_content(file_path) {
                Ok(content) => content,
                Err(err) => {
                    errors.push(err.to_string());
                    continue;
                },
            };

            match SchemaIndex::from_json_str(content) {
                Ok(schema) => {
                    log::debug!(
                        "{file_path:#?} defines {} types.",
                        schema.defined_type_count(),
                    );
                    num_object_types += schema.object_types().count();
                    num_input_types += schema.input_types().count();
                    num_enum_types += schema.enum_types().count();
                },

                Err(err) => errors.push(format!("{file_path:?}: {err:#?}")),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Schema check failed with {} error(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All schemas checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-schema files.\n",
                "  * Validated {} object types.\n",
                "  * Validated {} input types.\n",
                "  * Validated {} enum types.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_object_types,
            num_input_types,
            num_enum_types,
        ))
    }
}

fn has_schema_file_ext(path: &Path, schema_file_exts: &HashSet<&str>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| schema_file_exts.contains(ext.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("querydoc-check-schema-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("scratch dir is created");
        dir
    }

    fn cmd(paths: Vec<PathBuf>) -> CheckSchemaCmd {
        CheckSchemaCmd {
            schema_file_exts: vec!["json".to_string()],
            file_or_dir_paths: paths,
        }
    }

    #[test]
    fn directories_are_filtered_by_extension() {
        let dir = scratch_dir("filtered");
        fs::write(dir.join("a.json"), "{}").expect("file is written");
        fs::write(dir.join("notes.txt"), "").expect("file is written");

        let mut errors = vec![];
        let (file_paths, num_skipped_files) = cmd(vec![dir.clone()])
            .find_schema_files(&mut errors);

        assert!(errors.is_empty());
        assert_eq!(file_paths, vec![dir.join("a.json")]);
        assert_eq!(num_skipped_files, 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn single_explicit_file_is_checked_whatever_its_extension() {
        let dir = scratch_dir("explicit");
        let schema_path = dir.join("schema.txt");
        fs::write(&schema_path, "{}").expect("file is written");

        let mut errors = vec![];
        let (file_paths, num_skipped_files) = cmd(vec![schema_path.clone()])
            .find_schema_files(&mut errors);

        assert!(errors.is_empty());
        assert_eq!(file_paths, vec![schema_path]);
        assert_eq!(num_skipped_files, 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
