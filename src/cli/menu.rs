//! Interactive numbered menu over one catalog session.
//!
//! Generic over its input and output so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::application::services::{CatalogService, LoadReport};
use crate::domain::{CourseId, Traversal};

const MENU: &str = "\n1. Load Data Structure.\n\
                    2. Print Course List.\n\
                    3. Print Course.\n\
                    4. Remove Course.\n\
                    9. Exit\n\n\
                    What would you like to do? ";

pub struct Menu<R, W> {
    service: CatalogService,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(service: CatalogService, input: R, out: W) -> Self {
        Self {
            service,
            input,
            out,
        }
    }

    /// Run until the user picks exit or input ends; hands back the session's service.
    #[instrument(level = "debug", skip(self))]
    pub fn run(mut self) -> io::Result<CatalogService> {
        writeln!(self.out, "Welcome to the course planner.")?;

        loop {
            write!(self.out, "{MENU}")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed");
                writeln!(self.out)?;
                break;
            };

            // Only the leading token counts, the rest of the line is ignored
            let token = line.split_whitespace().next().unwrap_or_default();
            let choice: i64 = match token.parse() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.out, "Please enter a valid number.")?;
                    continue;
                }
            };

            match choice {
                9 => {
                    writeln!(self.out, "\nThank you for using the course planner!")?;
                    break;
                }
                1 => self.prompt_load()?,
                2..=4 if !self.service.is_loaded() => {
                    writeln!(self.out, "\nPlease load data first (option 1).")?;
                }
                2 => self.print_list()?,
                3 => self.print_course()?,
                4 => self.remove_course()?,
                other => writeln!(self.out, "\n{other} is not a valid option.")?,
            }
        }

        Ok(self.service)
    }

    /// Load `path` into the session and print the outcome.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        match self.service.load(path) {
            Ok(report) => self.print_report(&report),
            Err(e) => writeln!(self.out, "Error: {e}."),
        }
    }

    fn prompt_load(&mut self) -> io::Result<()> {
        let name = self.prompt("Enter filename: ")?;
        let path = match (name.is_empty(), &self.service.settings().data_file) {
            (false, _) => name.into(),
            (true, Some(configured)) => configured.clone(),
            (true, None) => return writeln!(self.out, "No file name given."),
        };
        self.load(&path)
    }

    fn print_report(&mut self, report: &LoadReport) -> io::Result<()> {
        for rejected in &report.rejected {
            writeln!(self.out, "{rejected}")?;
        }

        write!(
            self.out,
            "Loaded {} courses from \"{}\"",
            report.added,
            report.source.display()
        )?;
        if report.replaced > 0 {
            write!(self.out, " ({} updated)", report.replaced)?;
        }
        writeln!(self.out, ".")?;

        if !report.dangling.is_empty() {
            writeln!(
                self.out,
                "\nWARNING: One or more prerequisites were not found in the file:"
            )?;
            for reference in &report.dangling {
                writeln!(self.out, "  - {reference}")?;
            }
            writeln!(
                self.out,
                "Missing prerequisites will be shown as numbers without titles when printing details.\n"
            )?;
        }
        Ok(())
    }

    fn print_list(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nHere is a sample schedule:\n")?;
        for course in self.service.listing(Traversal::In) {
            writeln!(self.out, "{course}")?;
        }
        Ok(())
    }

    fn print_course(&mut self) -> io::Result<()> {
        let raw = self.prompt("What course do you want to know about? ")?;
        match self.service.course_detail(&raw) {
            Some(detail) => writeln!(self.out, "{detail}"),
            None => writeln!(self.out, "Course \"{}\" not found.", CourseId::new(&raw)),
        }
    }

    fn remove_course(&mut self) -> io::Result<()> {
        let raw = self.prompt("Which course do you want to remove? ")?;
        match self.service.remove(&raw) {
            Some(course) => writeln!(self.out, "Removed {course}."),
            None => writeln!(self.out, "Course \"{}\" not found.", CourseId::new(&raw)),
        }
    }

    /// Print `label` and read one trimmed answer; end of input reads as empty.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|s| s.trim().to_string()).unwrap_or_default())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
