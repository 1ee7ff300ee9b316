use crate::config::Config;
use crate::core::category::CategoryBook;
use crate::core::models::ShoppingList;
use crate::core::persist::{load_categories, load_list, save_categories, save_list};
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub list: ShoppingList,
    pub categories: CategoryBook,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_or_init(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let list = load_list(config.list_path())?;
        let categories = load_categories(config.categories_path())?;

        Ok(Self {
            config,
            list,
            categories,
            logger,
            startup_displayed: false,
            config_path,
            logs_dir,
        })
    }

    /// Re-reads the shared files; another process may have written them.
    pub fn reload(&mut self) -> Result<()> {
        self.list = load_list(self.config.list_path())?;
        self.categories = load_categories(self.config.categories_path())?;
        Ok(())
    }

    pub fn save_list(&self) -> Result<PathBuf> {
        save_list(&self.list, self.config.list_path())
    }

    pub fn save_categories(&self) -> Result<PathBuf> {
        save_categories(&self.categories, self.config.categories_path())
    }
}
