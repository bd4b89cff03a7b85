use nyx::lang::Error;

#[allow(dead_code)]
pub fn eval(source: &str) -> f64 {
    let chunk = match nyx::compile(source) {
        Ok(chunk) => chunk,
        Err(errors) => panic!("{} : {:?}", source, errors),
    };
    match nyx::run(&chunk) {
        Ok(val) => val,
        Err(e) => panic!("{} : {:?}", source, e),
    }
}

#[allow(dead_code)]
pub fn errors(source: &str) -> Vec<Error> {
    match nyx::compile(source) {
        Ok(chunk) => panic!("{} compiled to {:?}", source, chunk),
        Err(errors) => errors,
    }
}

#[allow(dead_code)]
pub fn messages(source: &str) -> Vec<String> {
    errors(source).iter().map(|e| e.text().to_string()).collect()
}
