use colored::Colorize;

const BANNER: &str = r"
     @@@@@@    @@@@@@@  @@@@@@@  @@@  @@@@@@@@  @@@  @@@  @@@@@@@@  @@@@@@@@
    @@@@@@@@  @@@@@@@@  @@@@@@@  @@@  @@@@@@@@  @@@  @@@  @@@@@@@@  @@@@@@@@
    @@!  @@@  !@@         @@!    @@!  @@!       @@!  @@@       @@!       @@!
    !@!  @!@  !@!         !@!    !@!  !@!       !@!  @!@      !@!       !@!
    @!@!@!@!  !@!         @!!    !!@  @!!!:!    @!@  !@!     @!!       @!!
    !!!@!!!!  !!!         !!!    !!!  !!!!!:    !@!  !!!    !!!       !!!
    !!:  !!!  :!!         !!:    !!:  !!:       !!:  !!!   !!:       !!:
    :!:  !:!  :!:         :!:    :!:  :!:       :!:  !:!  :!:       :!:
    ::   :::   ::: :::     ::     ::   ::       ::::: ::   :: ::::   :: ::::
     :   : :   :: :: :     :     :     :         : :  :   : :: : :  : :: : :
";

pub(crate) fn print_banner() {
    println!("{}", BANNER.red());
    println!("{}\n", format!("{:>76}", "By S1rN3tZ").bold());
}
