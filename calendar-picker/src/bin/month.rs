use std::env;

use calendar_picker::{CalendarDate, CellProps, Picker, PickerOptions, MONTH_NAMES};

fn main() {
    let mut date = None;
    let mut monday_start = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--monday" => monday_start = true,
            _ => match arg.parse::<CalendarDate>() {
                Ok(val) => date = Some(val),
                Err(err) => panic!("{err}"),
            },
        }
    }

    let today = CalendarDate::today();
    let options = PickerOptions::default().with_monday_start(monday_start);
    let mut picker = Picker::new(options).with_today(today);

    if let Some(date) = date {
        picker.set_value(Some(date));
        picker.jump(date.year(), date.month0()).expect("parsed month is valid");
    }

    let view = picker.render(|props: CellProps| props);
    let month = view.calendar.month;

    println!(" - today: {today}");
    println!(" - month: {}", month.year_month());

    if let Some(value) = picker.value() {
        println!(" - value: {value} ({})", picker.input_text());
    }

    println!("---");
    let title = format!("{} {}", MONTH_NAMES[usize::from(month.month0())], month.year());
    println!("{title:^27}");

    for label in view.calendar.labels {
        print!("{:>3} ", &label[..2]);
    }

    println!();

    for row in &view.calendar.rows {
        for cell in row {
            let mark = if cell.style.current {
                '*'
            } else if cell.style.today {
                '!'
            } else {
                ' '
            };

            if cell.style.diff_month {
                print!("  {mark} ");
            } else {
                print!("{:>2}{mark} ", cell.label);
            }
        }

        println!()
    }
}
