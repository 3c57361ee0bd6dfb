pub trait MenuView: Send + Sync {
    fn display_menu(&self, title: &str, options: &[String]);
    fn display_invalid_choice(&self, input: &str);
    fn display_banner(&self, title: &str);
}

pub struct ConsoleMenuView;

impl MenuView for ConsoleMenuView {
    fn display_menu(&self, title: &str, options: &[String]) {
        println!("\n{}:", title);
        for (i, option) in options.iter().enumerate() {
            println!("{}. {}", i + 1, option);
        }
    }

    fn display_invalid_choice(&self, _input: &str) {
        println!("Invalid choice, please try again.");
    }

    fn display_banner(&self, title: &str) {
        println!("================= {} =================", title);
    }
}
