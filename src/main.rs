fn main() {
    acronymic::run()
}
