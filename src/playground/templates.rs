//! Starter programs loaded into each playground buffer.

use crate::models::RunLanguage;

const PYTHON: &str = r#"# Python Playground
print("Hello, Python!")

# Variables and data types
name = "World"
numbers = [1, 2, 3, 4, 5]

# Function definition
def greet(name):
    return f"Hello, {name}!"

# Function call
message = greet(name)
print(message)

# List comprehension
squares = [x**2 for x in numbers]
print(f"Squares: {squares}")"#;

const JAVASCRIPT: &str = r#"// JavaScript Playground
console.log("Hello, JavaScript!");

// Variables and data types
const name = "World";
const numbers = [1, 2, 3, 4, 5];

// Function definition
function greet(name) {
    return `Hello, ${name}!`;
}

// Function call
const message = greet(name);
console.log(message);

// Array methods
const squares = numbers.map(x => x ** 2);
console.log(`Squares: ${squares}`);"#;

const JAVA: &str = r#"// Java Playground
public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, Java!");

        // Variables
        String name = "World";
        int[] numbers = {1, 2, 3, 4, 5};

        // Method call
        String message = greet(name);
        System.out.println(message);

        // Array processing
        System.out.print("Squares: ");
        for (int num : numbers) {
            System.out.print(num * num + " ");
        }
        System.out.println();
    }

    public static String greet(String name) {
        return "Hello, " + name + "!";
    }
}"#;

pub fn default_code(language: RunLanguage) -> &'static str {
    match language {
        RunLanguage::Python => PYTHON,
        RunLanguage::Javascript => JAVASCRIPT,
        RunLanguage::Java => JAVA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_start_with_a_header_comment() {
        assert!(default_code(RunLanguage::Python).starts_with("# Python"));
        assert!(default_code(RunLanguage::Javascript).starts_with("// JavaScript"));
        assert!(default_code(RunLanguage::Java).starts_with("// Java Playground"));
    }
}
