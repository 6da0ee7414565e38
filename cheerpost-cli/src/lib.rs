pub use crate::app::CheerCliApp;

mod app {
    use anyhow::{Context, Result};
    use cheerpost_core::{phrase_text, Config, FileStorage, LocalCounter, PageNavigator, PostService};
    use std::io::{self, BufRead, Write};

    pub struct CheerCliApp {
        posts: PostService,
        counter: LocalCounter<FileStorage, PageNavigator>,
    }

    impl CheerCliApp {
        pub fn new(config: &Config, start_path: &str) -> Result<Self> {
            let storage = FileStorage::open(&config.storage_file)?;

            Ok(Self {
                posts: PostService::new(config),
                counter: LocalCounter::new(storage, PageNavigator::new(start_path)),
            })
        }

        pub fn initialize(&self) {
            self.counter.page_loaded();
        }

        fn create_post(&mut self, content: &str) -> Result<()> {
            let result = self.posts.create_post(content);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }

        fn list_posts(&self) {
            if self.posts.store().is_empty() {
                println!("No posts yet.");
                return;
            }
            for post in self.posts.store().iter() {
                println!("[{}] {} ({}): {}", post.id, post.author, post.timestamp, post.content);
            }
        }

        fn show_inspiration(&self) {
            for phrase in self.posts.fetch_inspiration() {
                println!("  * {}", phrase_text(&phrase));
            }
        }

        fn set_counter(&mut self, input: &str) -> Result<()> {
            let count: i64 = input
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a whole number", input.trim()))?;
            self.counter.save_poops(count)?;
            println!("Counter saved: {}", count);
            Ok(())
        }

        fn go_to(&mut self, path: &str) -> Result<()> {
            self.counter.go_to(path)?;
            println!("Now at: {}", self.counter.current_path());
            Ok(())
        }

        fn show_menu(&self) -> Result<()> {
            let count = self.counter.get_poops().unwrap_or_default();
            let store = self.posts.store();
            let latest = store.latest().map(|post| post.content.as_str()).unwrap_or("-");

            println!("\n=== Cheerpost ===");
            println!("Page: {} | Posts: {} | Counter: {}", self.counter.current_path(), store.len(), count);
            println!("Latest post: {}", latest);
            println!();
            println!("1. Create post");
            println!("2. List posts");
            println!("3. Show inspiration");
            println!("4. Show counter");
            println!("5. Set counter");
            println!("6. Go to page");
            println!("7. Exit");
            print!("\nSelect an option (1-7): ");
            io::stdout().flush()?;
            Ok(())
        }

        fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
            print!("{}: ", label);
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        }

        pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
            loop {
                self.show_menu()?;

                let mut choice = String::new();
                if input.read_line(&mut choice)? == 0 {
                    println!();
                    break;
                }

                match choice.trim() {
                    "1" => {
                        if let Some(content) = Self::prompt(&mut input, "Content")? {
                            if let Err(e) = self.create_post(&content) {
                                eprintln!("Failed to create post: {}", e);
                            }
                        }
                    }
                    "2" => self.list_posts(),
                    "3" => self.show_inspiration(),
                    "4" => match self.counter.get_poops() {
                        Ok(count) => println!("Counter: {}", count),
                        Err(e) => eprintln!("Failed to read counter: {}", e),
                    },
                    "5" => {
                        if let Some(value) = Self::prompt(&mut input, "New value")? {
                            if let Err(e) = self.set_counter(&value) {
                                eprintln!("Failed to save counter: {}", e);
                            }
                        }
                    }
                    "6" => {
                        if let Some(path) = Self::prompt(&mut input, "Path")? {
                            if let Err(e) = self.go_to(&path) {
                                eprintln!("Failed to navigate: {}", e);
                            }
                        }
                    }
                    "7" => {
                        println!("Exiting Cheerpost...");
                        break;
                    }
                    _ => {
                        println!("Invalid option. Please select 1-7.");
                    }
                }
            }

            Ok(())
        }

        pub fn posts(&self) -> &PostService {
            &self.posts
        }

        pub fn counter(&self) -> &LocalCounter<FileStorage, PageNavigator> {
            &self.counter
        }
    }

}
