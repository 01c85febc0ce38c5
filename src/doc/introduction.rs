/*!
# Introductory Tutorial for the Keypad Calculator

Open a terminal and run `keypad`. The prompt waits for keys. Type one or
more keys on a line followed by ENTER and the display is redrawn below.
Type CTRL-D to exit. CTRL-C is the same as pressing `AC`.

<pre><code>&nbsp;> 12 +
&nbsp;  12 +
&nbsp;
&nbsp;> 3 =
&nbsp;
&nbsp;  15
</code></pre>

The display has two lines just like the keypad it imitates. The top line
is the previous operand and the operator waiting for a second operand.
The bottom line is the operand you are typing. After `=` the result sits
on the bottom line. Typing a digit now starts a new number instead of
extending the result, but choosing an operator carries the result forward.

<pre><code>&nbsp;> * 2 =
&nbsp;
&nbsp;  30
&nbsp;> 4
&nbsp;
&nbsp;  4
</code></pre>

Chaining operators evaluates as you go. There is no operator precedence;
`2 + 3 * 4 =` is `(2 + 3) * 4`.

Scientific keys act on the bottom line immediately.

<pre><code>&nbsp;> 9 sqrt
&nbsp;
&nbsp;  3
&nbsp;> ac 180 rad cos
&nbsp;
&nbsp;  -1
</code></pre>

Nonsense never stops the calculator. Something that is not a number
leaves the display blank, and impossible math shows `NaN` or `Infinity`.

<pre><code>&nbsp;> 10 / 0 =
&nbsp;
&nbsp;  Infinity
</code></pre>

Pass keys on the command line to skip the prompt and print the final
display: `keypad 12 + 3 =`.
*/
